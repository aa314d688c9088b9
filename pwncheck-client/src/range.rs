//! The range-query stage: one anonymized GET per lookup.

use crate::batch::CandidateBatch;
use crate::digest::{Fingerprint, PREFIX_LEN};
use crate::error::Error;

/// Endpoint of the public Pwned Passwords range API.
pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com/range";

/// Client for `{base_url}/{prefix}` range lookups.
///
/// The base URL is an explicit constructor argument so tests and mirrors can
/// point it anywhere. Only a 5-character fingerprint prefix is ever
/// transmitted; the service learns that *some* secret whose fingerprint
/// starts with those characters was checked, and nothing more.
#[derive(Debug, Clone)]
pub struct RangeClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for RangeClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl RangeClient {
    /// Creates a client against the given base URL with stock HTTP settings.
    ///
    /// Panics if the TLS backend cannot be initialized (see
    /// [`reqwest::Client::new`]); use [`RangeClient::with_client`] to
    /// control construction yourself.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Creates a client reusing a caller-configured [`reqwest::Client`]
    /// (timeout, user agent, pooling).
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        RangeClient { base_url, client }
    }

    /// Fetches the candidate batch for one fingerprint prefix.
    ///
    /// Exactly one round trip, never retried. A non-200 answer becomes
    /// [`Error::HttpStatus`] and a transport failure
    /// [`Error::HttpRequest`]; the caller decides whether to retry, skip,
    /// or abort.
    pub async fn lookup(&self, prefix: &str) -> Result<CandidateBatch, Error> {
        if prefix.len() != PREFIX_LEN || !prefix.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidPrefix { prefix: prefix.to_string() });
        }

        let url = format!("{}/{}", self.base_url, prefix);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::HttpStatus {
                prefix: prefix.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })?;

        Ok(CandidateBatch::parse(&body))
    }

    /// Runs the whole pipeline for one secret: fingerprint it, query the
    /// service with the prefix, match the suffix locally.
    pub async fn check(&self, secret: &str) -> Result<u64, Error> {
        self.check_fingerprint(&Fingerprint::of(secret)).await
    }

    /// The pipeline minus the digest stage, for callers already holding a
    /// SHA-1 fingerprint.
    pub async fn check_fingerprint(&self, fingerprint: &Fingerprint) -> Result<u64, Error> {
        let batch = self.lookup(fingerprint.prefix()).await?;
        Ok(batch.leak_count(fingerprint.suffix()))
    }
}
