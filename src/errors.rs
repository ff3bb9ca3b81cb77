use thiserror::Error;

/// Failures surfaced by the remote clients. Nothing here is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or a non-success HTTP status.
    #[error("remote fetch failed: {0}")]
    RemoteFetch(#[from] reqwest::Error),

    /// The body did not have the expected (possibly double-encoded) JSON shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A trade size that cannot be encoded as a JSON number.
    #[error("trade amount must be finite, got {0}")]
    InvalidAmount(f64),
}

impl ClientError {
    pub fn malformed(context: impl std::fmt::Display, err: serde_json::Error) -> Self {
        ClientError::MalformedResponse(format!("{context}: {err}"))
    }
}
