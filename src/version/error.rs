use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Transport-level failure, including the per-request timeout
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The registry answered with a non-success status
    #[error("Registry returned {0}")]
    Unavailable(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
