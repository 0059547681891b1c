//! Error types for the hr-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Please set {var} environment variable")]
    MissingApiKey { var: &'static str },

    #[error("Failed to read geometry file: {path}")]
    GeometryFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Study error: {0}")]
    Study(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Unexpected response: {0}")]
    Response(String),
}

/// Result type for hr-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<hr_api::ApiError> for AppError {
    fn from(err: hr_api::ApiError) -> Self {
        AppError::Api(err.to_string())
    }
}

impl From<hr_study::StudyError> for AppError {
    fn from(err: hr_study::StudyError) -> Self {
        AppError::Study(err.to_string())
    }
}
