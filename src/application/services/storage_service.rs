use async_trait::async_trait;

use crate::{
    application::{error::ApplicationError, services::ChunkSource},
    domain::models::file::StoredFile,
};

#[async_trait]
pub trait StorageService: Send + Sync {
    /// Drains `source` into a new file named `<uuid><extension>`. Never
    /// replaces an existing file.
    async fn store(
        &self,
        extension: &str,
        source: &mut dyn ChunkSource,
    ) -> Result<StoredFile, ApplicationError>;
}
