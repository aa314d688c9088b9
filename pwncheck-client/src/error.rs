#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure: DNS, TLS, connection refused, timeout.
    #[error("range request failed for prefix {prefix}: {source}")]
    HttpRequest {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    /// The range service answered with something other than 200.
    #[error("range service returned HTTP {status} for prefix {prefix}")]
    HttpStatus { prefix: String, status: u16 },

    /// The prefix handed to the range query was not 5 hex characters.
    #[error("invalid range prefix {prefix:?}: expected 5 hex characters")]
    InvalidPrefix { prefix: String },
}
