//! Signer configuration.

use std::str::FromStr;

use crate::hash::base64_hmac_sha1;
use crate::{Error, Result};

/// Config carries all the configuration for a signer.
///
/// It is validated once at construction and immutable afterwards; every
/// signing operation performed by that signer follows it.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the signature method, validated against the supported set
    /// at signer construction.
    ///
    /// - default to `HMAC-SHA1`
    pub signature_method: String,
    /// Length of the generated `oauth_nonce` value.
    ///
    /// - default to `32`
    pub nonce_length: usize,
    /// Value sent as `oauth_version`.
    ///
    /// - default to `1.0`
    pub version: String,
    /// Separator between `key="value"` pairs in the Authorization header.
    ///
    /// - default to `", "`
    pub parameter_separator: String,
    /// Whether the signing key keeps its trailing `&` when no token secret
    /// exists. The reference protocol behavior keeps it.
    ///
    /// - default to `true`
    pub last_ampersand: bool,
    /// Protection realm emitted first in the Authorization header.
    ///
    /// Never participates in the signature.
    pub realm: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            signature_method: SignatureMethod::HmacSha1.name().to_string(),
            nonce_length: 32,
            version: "1.0".to_string(),
            parameter_separator: ", ".to_string(),
            last_ampersand: true,
            realm: None,
        }
    }
}

/// SignatureMethod is the method used to sign the base string.
///
/// The variant is resolved once at signer construction, so signing calls
/// never re-validate configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureMethod {
    /// `base64(HMAC-SHA1(signing key, base string))`.
    HmacSha1,
    /// The signing key verbatim, unhashed. Only for contexts where the
    /// transport itself is secured.
    Plaintext,
}

impl SignatureMethod {
    /// The name sent as `oauth_signature_method`.
    pub fn name(&self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::Plaintext => "PLAINTEXT",
        }
    }

    /// Compute the signature over the base string.
    pub(crate) fn sign(&self, signing_key: &str, base_string: &str) -> String {
        match self {
            SignatureMethod::HmacSha1 => {
                base64_hmac_sha1(signing_key.as_bytes(), base_string.as_bytes())
            }
            SignatureMethod::Plaintext => signing_key.to_string(),
        }
    }
}

impl FromStr for SignatureMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HMAC-SHA1" => Ok(SignatureMethod::HmacSha1),
            "PLAINTEXT" => Ok(SignatureMethod::Plaintext),
            // RSA-SHA1 is defined by the protocol but needs an asymmetric
            // key pair this signer does not carry.
            "RSA-SHA1" => Err(Error::config_invalid(
                "signature method RSA-SHA1 is not supported",
            )),
            other => Err(Error::config_invalid(format!(
                "unknown signature method: {other}"
            ))),
        }
    }
}
