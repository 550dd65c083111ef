use thiserror::Error;

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure, or a reply body that is not the expected JSON
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
