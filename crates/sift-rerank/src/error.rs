use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("provider returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("provider API error: status={status}, body={body}")]
    Api { status: u16, body: String },
}

/// Failures of the rerank post-processing stage itself.
///
/// Provider failures pass through the transparent variant untouched; the
/// stage adds no retry, fallback ranking, or partial-result recovery.
#[derive(Debug, Error)]
pub enum RerankError {
    #[error("rerank requires a query")]
    MissingQuery,

    #[error("rerank result index {index} out of range for {len} documents")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Client(#[from] ProviderError),
}
