use std::path::PathBuf;

/// Spreadsheet formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Xlsx,
    Xls,
}

impl SpreadsheetFormat {
    /// Matches an extension (leading dot included) case-insensitively.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            ".xlsx" => Some(SpreadsheetFormat::Xlsx),
            ".xls" => Some(SpreadsheetFormat::Xls),
            _ => None,
        }
    }
}

/// Returns the extension of the last path segment, leading dot included, or
/// an empty string. Leading dots of the name do not start an extension, so
/// `.xlsx` on its own has none.
pub fn file_extension(filename: &str) -> &str {
    let base = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);
    let stem = base.trim_start_matches('.');

    match stem.rfind('.') {
        Some(idx) => &stem[idx..],
        None => "",
    }
}

/// A byte stream persisted to the storage directory under a generated name.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub generated_name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Row and column count of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabularShape {
    pub rows: usize,
    pub columns: usize,
}
