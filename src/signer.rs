//! The signer itself: parameter canonicalization, base-string construction
//! and signature computation.

use std::collections::BTreeMap;
use std::fmt::Write;

use http::HeaderValue;
use log::debug;

use crate::config::{Config, SignatureMethod};
use crate::constants::{
    OAUTH_CONSUMER_KEY, OAUTH_NONCE, OAUTH_PREFIX, OAUTH_SIGNATURE, OAUTH_SIGNATURE_METHOD,
    OAUTH_TIMESTAMP, OAUTH_TOKEN, OAUTH_VERSION,
};
use crate::credential::{Consumer, Token};
use crate::encode::percent_encode;
use crate::error::{Error, Result};
use crate::nonce;
use crate::request::SignableRequest;
use crate::time::{format_timestamp, now, DateTime};

/// The full set of protocol parameters produced by one signing call.
///
/// `oauth_signature` is filled last, after every other field is final. The
/// set must not be mutated afterwards without re-signing, since the signature
/// covers all of the other parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OAuthParameters(BTreeMap<String, String>);

impl OAuthParameters {
    fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Get a parameter value by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate the parameters in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the underlying mapping, for callers that build their own
    /// query string or header.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

/// Signer is the main struct used to sign requests.
///
/// All state is immutable configuration fixed at construction; signing reads
/// only its inputs, so one signer can be shared across threads freely.
#[derive(Clone, Debug)]
pub struct Signer {
    consumer: Consumer,
    config: Config,
    method: SignatureMethod,

    time: Option<DateTime>,
    nonce: Option<String>,
}

impl Signer {
    /// Create a new signer.
    ///
    /// Validates the configured signature method against the supported set
    /// and rejects an empty consumer key.
    pub fn new(consumer: Consumer, config: Config) -> Result<Self> {
        if consumer.key.is_empty() {
            return Err(Error::credential_invalid("consumer key is required"));
        }
        let method = config.signature_method.parse::<SignatureMethod>()?;

        Ok(Self {
            consumer,
            config,
            method,
            time: None,
            nonce: None,
        })
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub(crate) fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// We should always generate a fresh nonce per request.
    /// Only use this function for testing.
    #[cfg(test)]
    pub(crate) fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }

    fn get_nonce(&self) -> String {
        self.nonce
            .clone()
            .unwrap_or_else(|| nonce::generate(self.config.nonce_length))
    }

    /// Sign a request, producing the full parameter set including
    /// `oauth_signature`.
    ///
    /// The URL is not validated; a malformed URL is signed as given and
    /// yields whatever signature a server would derive for that same string.
    /// Only an empty URL is rejected outright.
    pub fn sign(&self, req: &SignableRequest, token: Option<&Token>) -> Result<OAuthParameters> {
        if req.url.is_empty() {
            return Err(Error::request_invalid("request url is empty"));
        }

        let mut params = OAuthParameters::default();
        params.insert(OAUTH_CONSUMER_KEY, self.consumer.key.as_str());
        params.insert(OAUTH_NONCE, self.get_nonce());
        params.insert(OAUTH_SIGNATURE_METHOD, self.method.name());
        params.insert(OAUTH_TIMESTAMP, format_timestamp(self.get_time()));
        params.insert(OAUTH_VERSION, self.config.version.as_str());
        if let Some(token) = token {
            params.insert(OAUTH_TOKEN, token.key.as_str());
        }

        let base_string = signature_base_string(req, &params);
        debug!("calculated signature base string: {base_string}");

        let signing_key = signing_key(
            &self.consumer.secret,
            token.map(|t| t.secret.as_str()),
            self.config.last_ampersand,
        );
        params.insert(OAUTH_SIGNATURE, self.method.sign(&signing_key, &base_string));

        Ok(params)
    }

    /// Serialize protocol parameters as an `Authorization` header value.
    ///
    /// Only `oauth_`-prefixed parameters are included, sorted by name, each
    /// key and value percent-encoded, joined by the configured separator.
    /// The configured realm, if any, leads the list. The returned value is
    /// marked sensitive so it stays out of logs.
    pub fn authorization_header(&self, params: &OAuthParameters) -> Result<HeaderValue> {
        let mut value = String::from("OAuth ");
        if let Some(realm) = &self.config.realm {
            write!(value, "realm=\"{realm}\"{}", self.config.parameter_separator)?;
        }

        let pairs = params
            .iter()
            .filter(|(k, _)| k.starts_with(OAUTH_PREFIX))
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>();
        value.push_str(&pairs.join(&self.config.parameter_separator));

        let mut header: HeaderValue = value.parse()?;
        header.set_sensitive(true);

        Ok(header)
    }
}

/// Merge URL query, request data and protocol parameters into the canonical
/// parameter string.
///
/// Later sources overwrite on key collision: protocol parameters after
/// request data after URL-derived parameters. Every key and value is
/// percent-encoded exactly once and entries are sorted over the encoded
/// form, byte-wise, as the protocol mandates.
fn canonical_parameter_string(req: &SignableRequest, oauth: &OAuthParameters) -> String {
    let mut merged = req.query_params();
    for (k, v) in &req.data {
        merged.insert(k.clone(), v.clone());
    }
    for (k, v) in oauth.iter() {
        merged.insert(k.to_string(), v.to_string());
    }

    let mut pairs = merged
        .into_iter()
        .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
        .collect::<Vec<_>>();
    pairs.sort();

    // 256 is specially chosen to avoid reallocation for most requests.
    let mut s = String::with_capacity(256);
    for (idx, (k, v)) in pairs.into_iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(&k);
        s.push('=');
        s.push_str(&v);
    }

    s
}

/// Build the exact byte sequence that gets signed.
///
/// Any difference here - method casing, a trailing slash, query inclusion -
/// produces a different, incompatible signature.
fn signature_base_string(req: &SignableRequest, oauth: &OAuthParameters) -> String {
    let canonical = canonical_parameter_string(req, oauth);

    format!(
        "{}&{}&{}",
        req.method.as_str().to_uppercase(),
        percent_encode(req.base_url()),
        percent_encode(&canonical)
    )
}

/// Derive the symmetric signing key from the two secrets.
///
/// A non-empty token secret is always appended. Without one, the trailing
/// `&` is kept unless the last-ampersand policy is disabled.
fn signing_key(consumer_secret: &str, token_secret: Option<&str>, last_ampersand: bool) -> String {
    let consumer_secret = percent_encode(consumer_secret);

    match token_secret {
        Some(secret) if !secret.is_empty() => {
            format!("{consumer_secret}&{}", percent_encode(secret))
        }
        _ if last_ampersand => format!("{consumer_secret}&"),
        _ => consumer_secret,
    }
}
