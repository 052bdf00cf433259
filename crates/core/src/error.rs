use codata_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid catalog: {0}")]
    Validation(String),
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CodataError> for ApiError {
    fn from(err: CodataError) -> Self {
        match err {
            CodataError::InvalidPattern(msg) => ApiError::InvalidArgument(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodataError>;
