use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RfcError(#[from] kunai_rfc::error::RfcError),

    #[error("Invalid card document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
