use thiserror::Error;

/// Failure of a pantry API call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("failed to encode request body: {0}")]
    Encode(serde_json::Error),
    #[error("failed to decode response: {0}")]
    Decode(serde_json::Error),
    #[error("server rejected request: {0}")]
    Rejected(String),
}
