use std::path::Path;

use thiserror::Error;

use crate::domain::models::file::TabularShape;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot open workbook: {0}")]
    Open(String),

    #[error("workbook has no sheets")]
    NoSheets,

    #[error("cannot read first sheet: {0}")]
    Sheet(String),
}

/// Opens a stored file as a workbook and measures its first sheet.
pub trait TabularReader: Send + Sync {
    fn read_shape(&self, path: &Path) -> Result<TabularShape, ReadError>;
}
