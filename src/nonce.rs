//! Nonce generation.
//!
//! Servers reject timestamp+nonce reuse, so every signed request carries a
//! fresh random string. The alphabet is `[A-Za-z0-9]`; at the default length
//! of 32 the collision probability over a consumer/token pair's lifetime is
//! negligible.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate an alphanumeric nonce of the given length.
///
/// Uses the thread-local generator, which is safe to call from multiple
/// threads concurrently.
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::thread_rng(), length)
}

/// Generate an alphanumeric nonce from the provided random source.
///
/// Taking the generator as an argument keeps nonce output reproducible when
/// a seeded source is supplied.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    std::iter::repeat_with(|| char::from(rng.sample(Alphanumeric)))
        .take(length)
        .collect()
}
