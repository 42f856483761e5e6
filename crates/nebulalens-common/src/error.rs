use thiserror::Error;

#[derive(Debug, Error)]
pub enum NebulaError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Classifier unreachable: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Classifier returned HTTP {status}")]
    Status { status: u16 },

    /// Logical failure reported by the classifier in an `error` field.
    #[error("{0}")]
    Server(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The prediction task ended without producing an outcome.
    #[error("Prediction aborted: {0}")]
    Aborted(String),
}

impl NebulaError {
    /// True for failures that never produced a usable response body.
    pub fn is_transport(&self) -> bool {
        matches!(self, NebulaError::Http(_) | NebulaError::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, NebulaError>;
