use async_trait::async_trait;
use axum::{
    extract::multipart::{Field, MultipartError},
    http::StatusCode,
};
use bytes::Bytes;
use tracing::warn;

use crate::application::{error::ApplicationError, services::ChunkSource};

/// Streams a multipart field chunk by chunk as it arrives from the client.
pub struct FieldSource<'a> {
    field: Field<'a>,
}

impl<'a> FieldSource<'a> {
    pub fn new(field: Field<'a>) -> Self {
        Self { field }
    }
}

#[async_trait]
impl ChunkSource for FieldSource<'_> {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, ApplicationError> {
        self.field.chunk().await.map_err(multipart_error)
    }
}

pub fn multipart_error(error: MultipartError) -> ApplicationError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApplicationError::PayloadTooLarge
    } else {
        warn!("Invalid multipart data: {}", error.body_text());
        ApplicationError::BadRequest("Invalid multipart data".to_string())
    }
}
