//! Percent-encoding as required for canonical parameter comparison.

use percent_encoding::percent_decode_str;
use percent_encoding::utf8_percent_encode;

use crate::constants::OAUTH_ENCODE_SET;

/// Percent-encode a string the way canonical strings require.
///
/// Every byte outside the unreserved set (letters, digits, `-`, `.`, `_`,
/// `~`) is escaped with uppercase hex digits. Apply it to keys and values
/// independently, exactly once; encoding an already-encoded value produces a
/// different (double-encoded) string and an incompatible signature.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}

/// Percent-decode a string, replacing invalid UTF-8 sequences lossily.
pub fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
