use std::{fs, io::Cursor, path::Path};

use calamine::{open_workbook_auto_from_rs, Reader};
use tracing::debug;

use crate::{
    application::services::{ReadError, TabularReader},
    domain::models::file::TabularShape,
};

/// Reads `.xlsx` and `.xls` workbooks with calamine. The format is detected
/// from the content, so an OOXML workbook saved as `.xls` still reads.
pub struct CalamineReader {
    header_row: bool,
}

impl CalamineReader {
    /// With `header_row` set, the first non-empty row names the columns and
    /// is not counted as data.
    pub fn new(header_row: bool) -> Self {
        Self { header_row }
    }
}

impl TabularReader for CalamineReader {
    fn read_shape(&self, path: &Path) -> Result<TabularShape, ReadError> {
        let content = fs::read(path).map_err(|e| ReadError::Open(e.to_string()))?;
        debug!("Opening {:?} ({} bytes)", path, content.len());

        let mut workbook = open_workbook_auto_from_rs(Cursor::new(content))
            .map_err(|e| ReadError::Open(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ReadError::NoSheets)?
            .map_err(|e| ReadError::Sheet(e.to_string()))?;

        // Columns count from column A, rows from the first non-empty row.
        let (height, width) = range.get_size();
        let leading_columns = range.start().map_or(0, |(_, col)| col as usize);
        let rows = if self.header_row {
            height.saturating_sub(1)
        } else {
            height
        };

        Ok(TabularShape {
            rows,
            columns: leading_columns + width,
        })
    }
}
