//! OAuth 1.0a request signing.
//!
//! Given an HTTP request description and a set of credentials, this crate
//! deterministically produces the canonical signature and the protocol
//! parameters a server can re-derive and verify. It covers the signing
//! algorithm only: percent-encoding, parameter canonicalization, base-string
//! construction, signing-key derivation and signature serialization.
//! Transport and credential acquisition belong to the HTTP client that
//! consumes the produced values.
//!
//! ## Overview
//!
//! The crate is built around a few small pieces:
//!
//! - [`Consumer`] / [`Token`]: the credential pairs involved in signing
//! - [`SignableRequest`]: the method, URL and body parameters being signed
//! - [`Config`]: per-signer settings, validated once at construction
//! - [`Signer`]: the orchestrator producing [`OAuthParameters`]
//!
//! ## Quick Start
//!
//! ```
//! use oauth1_sign::{Config, Consumer, SignableRequest, Signer};
//!
//! # fn main() -> oauth1_sign::Result<()> {
//! let consumer = Consumer::new("app-key", "app-secret");
//! let signer = Signer::new(consumer, Config::default())?;
//!
//! let request = SignableRequest::new(
//!     http::Method::POST,
//!     "https://api.example.com/1/statuses/update.json",
//! )
//! .with_data("status", "Hello Ladies + Gentlemen, a signed OAuth request!");
//!
//! // The full parameter set, including `oauth_signature`.
//! let params = signer.sign(&request, None)?;
//!
//! // Ready to attach to an outgoing request.
//! let authorization = signer.authorization_header(&params)?;
//! # let _ = authorization;
//! # Ok(())
//! # }
//! ```
//!
//! ## Signature methods
//!
//! `HMAC-SHA1` and `PLAINTEXT` are supported; the method is resolved once at
//! construction and an unsupported name (including `RSA-SHA1`) fails there
//! rather than at signing time.
//!
//! ## Concurrency
//!
//! Signing is a pure computation over its inputs. A [`Signer`] holds only
//! immutable configuration and may be shared across threads; the default
//! nonce source is the thread-local generator.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod encode;
pub mod hash;
pub mod nonce;
pub mod time;

mod constants;

mod config;
pub use config::{Config, SignatureMethod};

mod credential;
pub use credential::{Consumer, Token};

mod error;
pub use error::{Error, ErrorKind, Result};

mod request;
pub use request::{canonical_query_params, SignableRequest};

mod signer;
pub use signer::{OAuthParameters, Signer};
