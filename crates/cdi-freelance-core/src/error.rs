use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdiFreelanceError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CdiFreelanceError {
    fn from(e: serde_json::Error) -> Self {
        CdiFreelanceError::SerializationError(e.to_string())
    }
}
