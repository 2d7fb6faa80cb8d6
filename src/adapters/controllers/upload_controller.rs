use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::upload_dto::UploadFileResponse,
        multipart_source::{multipart_error, FieldSource},
    },
    application::{error::ApplicationError, services::UploadService},
};

const FILE_FIELD: &str = "file";

pub struct UploadController;

impl UploadController {
    /// Stores the `file` field and reports the shape of its first sheet
    /// POST /upload_file
    pub async fn upload_file(
        State(upload_service): State<Arc<UploadService>>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Json<UploadFileResponse>, ApplicationError> {
        let mut multipart = multipart.map_err(|e| {
            warn!("Upload request is not multipart: {}", e);
            ApplicationError::MissingFile
        })?;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let filename = field.file_name().unwrap_or_default().to_string();
            let mut source = FieldSource::new(field);
            let outcome = upload_service.upload(&filename, &mut source).await?;

            info!(
                "Processed {} as {}",
                outcome.original_filename, outcome.stored.generated_name
            );
            return Ok(Json(UploadFileResponse::from(outcome)));
        }

        Err(ApplicationError::MissingFile)
    }
}
