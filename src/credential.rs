//! Credential pairs used in signing.

use std::fmt::{Debug, Formatter};

/// Replace a secret with a marker so `Debug` output never leaks it.
fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "EMPTY"
    } else {
        "***"
    }
}

/// Consumer is the identity of the application performing the request.
///
/// It is supplied once at signer construction and is immutable for the
/// signer's lifetime.
#[derive(Default, Clone)]
pub struct Consumer {
    /// Public identifier, sent as `oauth_consumer_key`.
    pub key: String,
    /// Shared secret, used only for signing-key derivation.
    pub secret: String,
}

impl Consumer {
    /// Create a new consumer credential pair.
    pub fn new(key: &str, secret: &str) -> Self {
        Self {
            key: key.to_string(),
            secret: secret.to_string(),
        }
    }
}

impl Debug for Consumer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Consumer")
            .field("key", &self.key)
            .field("secret", &redact(&self.secret))
            .finish()
    }
}

/// Token is a delegated-access credential representing a resource owner's
/// authorization.
///
/// Absent for two-legged requests; supplied per signing call and never
/// persisted by the signer.
#[derive(Default, Clone)]
pub struct Token {
    /// Public identifier, sent as `oauth_token`.
    pub key: String,
    /// Shared secret, used only for signing-key derivation.
    pub secret: String,
}

impl Token {
    /// Create a new token credential pair.
    pub fn new(key: &str, secret: &str) -> Self {
        Self {
            key: key.to_string(),
            secret: secret.to_string(),
        }
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("key", &self.key)
            .field("secret", &redact(&self.secret))
            .finish()
    }
}
