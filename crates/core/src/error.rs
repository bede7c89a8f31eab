// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid file type: {path} (expected a .json file)")]
    InvalidFileType { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// True for failures of the data load itself (network, file, JSON shape).
    /// Used by the interactive session to decide the wording of the report.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            AppError::Domain(_)
                | AppError::Fetch(_)
                | AppError::HttpStatus { .. }
                | AppError::Io(_)
                | AppError::Serialization(_)
        )
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
