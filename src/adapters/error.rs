use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::ApplicationError;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApplicationError::BadRequest(ref msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            ApplicationError::MissingFile => {
                warn!("Upload without a 'file' field");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({ "error": self.to_string() }),
                )
            }
            ApplicationError::Validation(ref msg) => {
                warn!("Validation failed: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, json!({ "error": msg }))
            }
            ApplicationError::UnsupportedFileType { ref extension } => {
                warn!("Unsupported file type: '{}'", extension);
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": "Invalid file type. Only .xlsx and .xls files are allowed",
                        "extension": extension,
                    }),
                )
            }
            ApplicationError::PayloadTooLarge => {
                warn!("File too large");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    json!({ "error": "File too large" }),
                )
            }
            ApplicationError::InvalidContent {
                ref filename,
                ref reason,
            } => {
                warn!("Invalid spreadsheet {}: {}", filename, reason);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "status": "invalid",
                        "filename": filename,
                        "error": reason,
                    }),
                )
            }
            ApplicationError::Storage(ref msg) => {
                error!("Storage failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": format!("An error occurred while uploading the file: {}", msg) }),
                )
            }
            ApplicationError::InternalError(ref msg) => {
                error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
