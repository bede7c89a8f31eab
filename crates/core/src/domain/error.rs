// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Job document must be a JSON array of objects")]
    NotAnArray,

    #[error("Record #{index} is not a JSON object")]
    RecordNotObject { index: usize },

    #[error("Record #{index} is missing required field \"{key}\"")]
    MissingField { index: usize, key: String },

    #[error("Record #{index} has an unsupported value for field \"{key}\"")]
    InvalidField { index: usize, key: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
