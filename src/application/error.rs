use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Missing required 'file' field")]
    MissingFile,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("File type '{extension}' is not allowed")]
    UnsupportedFileType { extension: String },

    #[error("File too large")]
    PayloadTooLarge,

    #[error("File '{filename}' is not a readable spreadsheet: {reason}")]
    InvalidContent { filename: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
