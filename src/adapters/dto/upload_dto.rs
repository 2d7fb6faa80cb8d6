use serde::Serialize;

use crate::application::services::UploadOutcome;

pub const UPLOAD_STATUS_OK: &str = "ok";

#[derive(Debug, Serialize)]
pub struct UploadFileResponse {
    pub filename: String,
    pub original_filename: String,
    pub rows: usize,
    pub columns: usize,
    pub status: String,
}

impl From<UploadOutcome> for UploadFileResponse {
    fn from(outcome: UploadOutcome) -> Self {
        Self {
            filename: outcome.stored.generated_name,
            original_filename: outcome.original_filename,
            rows: outcome.shape.rows,
            columns: outcome.shape.columns,
            status: UPLOAD_STATUS_OK.to_string(),
        }
    }
}
