use std::path::PathBuf;

use async_trait::async_trait;
use tokio::{
    fs::{self, OpenOptions},
    io::{AsyncWriteExt, BufWriter},
};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::{
    application::{
        error::ApplicationError,
        services::{ChunkSource, StorageService},
    },
    domain::models::file::StoredFile,
    services::error::StorageError,
};

/// Stores uploads as flat files named `<uuid><extension>` under `root`.
pub struct LocalStorageService {
    root: PathBuf,
    chunk_size: usize,
    max_bytes: u64,
}

impl LocalStorageService {
    pub fn new(root: PathBuf, chunk_size: usize, max_bytes: usize) -> Self {
        Self {
            root,
            chunk_size,
            max_bytes: max_bytes as u64,
        }
    }

    fn generate_file_name(extension: &str) -> String {
        format!("{}{}", Uuid::new_v4(), extension)
    }
}

#[async_trait]
impl StorageService for LocalStorageService {
    async fn store(
        &self,
        extension: &str,
        source: &mut dyn ChunkSource,
    ) -> Result<StoredFile, ApplicationError> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            error!("Cannot create upload directory {:?}: {}", self.root, e);
            StorageError::CreateDirectory {
                path: self.root.clone(),
                source: e,
            }
        })?;

        let generated_name = Self::generate_file_name(extension);
        let path = self.root.join(&generated_name);

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                error!("Cannot create {:?}: {}", path, e);
                StorageError::CreateFile {
                    path: path.clone(),
                    source: e,
                }
            })?;

        let write_error = |e: std::io::Error| {
            error!("Write to {:?} failed: {}", path, e);
            StorageError::Write {
                path: path.clone(),
                source: e,
            }
        };

        let mut writer = BufWriter::with_capacity(self.chunk_size, file);
        let mut size_bytes: u64 = 0;

        while let Some(chunk) = source.next_chunk().await? {
            size_bytes += chunk.len() as u64;
            if size_bytes > self.max_bytes {
                warn!(
                    "Upload {} exceeded the {} byte limit, partial file left on disk",
                    generated_name, self.max_bytes
                );
                return Err(ApplicationError::PayloadTooLarge);
            }
            writer.write_all(&chunk).await.map_err(write_error)?;
        }

        writer.flush().await.map_err(write_error)?;
        debug!("Wrote {} bytes to {:?}", size_bytes, path);

        Ok(StoredFile {
            generated_name,
            path,
            size_bytes,
        })
    }
}
