use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    application::services::UploadService,
    domain::config::server::ServerConfig,
    services::{CalamineReader, LocalStorageService},
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub upload_service: Arc<UploadService>,
}

impl AppState {
    /// Wires the local disk store and the calamine reader from `config`.
    pub fn from_config(config: ServerConfig) -> Self {
        let storage = LocalStorageService::new(
            config.upload_dir.clone(),
            config.chunk_size,
            config.max_upload_bytes,
        );
        let reader = CalamineReader::new(config.header_row);

        Self {
            upload_service: Arc::new(UploadService::new(Arc::new(storage), Arc::new(reader))),
            config: Arc::new(config),
        }
    }
}
