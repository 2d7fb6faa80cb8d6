use std::{io, path::PathBuf};

use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Cannot create storage directory {path:?}: {source}")]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[error("Cannot create file {path:?}: {source}")]
    CreateFile { path: PathBuf, source: io::Error },

    #[error("Cannot write file {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        ApplicationError::Storage(error.to_string())
    }
}
