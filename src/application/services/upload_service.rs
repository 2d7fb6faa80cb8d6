use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        error::ApplicationError,
        instrumentation::timed_async,
        services::{ChunkSource, StorageService, TabularReader},
    },
    domain::models::file::{file_extension, SpreadsheetFormat, StoredFile, TabularShape},
};

#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub stored: StoredFile,
    pub original_filename: String,
    pub shape: TabularShape,
}

/// Validates, persists and measures uploaded spreadsheets.
pub struct UploadService {
    storage: Arc<dyn StorageService>,
    reader: Arc<dyn TabularReader>,
}

impl UploadService {
    pub fn new(storage: Arc<dyn StorageService>, reader: Arc<dyn TabularReader>) -> Self {
        Self { storage, reader }
    }

    /// Returns the accepted extension, rejecting others before anything is written.
    fn validate_filename(declared_filename: &str) -> Result<&str, ApplicationError> {
        let extension = file_extension(declared_filename);
        match SpreadsheetFormat::from_extension(extension) {
            Some(_) => Ok(extension),
            None => {
                warn!("Rejected upload '{}' with extension '{}'", declared_filename, extension);
                Err(ApplicationError::UnsupportedFileType {
                    extension: extension.to_string(),
                })
            }
        }
    }

    #[instrument(skip(self, source))]
    pub async fn upload(
        &self,
        declared_filename: &str,
        source: &mut dyn ChunkSource,
    ) -> Result<UploadOutcome, ApplicationError> {
        info!("Uploading file: {}", declared_filename);
        let extension = Self::validate_filename(declared_filename)?;

        let (stored, elapsed) = timed_async("store_upload", self.storage.store(extension, source)).await;
        let stored = stored?;
        info!(
            "File uploaded successfully: {} ({} bytes in {:?})",
            stored.generated_name, stored.size_bytes, elapsed
        );

        let reader = self.reader.clone();
        let path = stored.path.clone();
        let shape = tokio::task::spawn_blocking(move || reader.read_shape(&path))
            .await
            .map_err(|e| ApplicationError::InternalError(format!("Reader task failed: {}", e)))?
            .map_err(|e| {
                warn!("Stored file {} is not a readable spreadsheet: {}", stored.generated_name, e);
                ApplicationError::InvalidContent {
                    filename: stored.generated_name.clone(),
                    reason: e.to_string(),
                }
            })?;

        info!(
            "Read {} rows and {} columns from {}",
            shape.rows, shape.columns, stored.generated_name
        );

        Ok(UploadOutcome {
            stored,
            original_filename: declared_filename.to_string(),
            shape,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        path::Path,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use bytes::Bytes;

    use super::*;
    use crate::{
        application::services::ReadError,
        services::{CalamineReader, LocalStorageService},
    };

    struct FixedReader(Result<TabularShape, ()>);

    impl TabularReader for FixedReader {
        fn read_shape(&self, _path: &Path) -> Result<TabularShape, ReadError> {
            self.0.map_err(|_| ReadError::NoSheets)
        }
    }

    #[derive(Default)]
    struct CountingStorage {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl StorageService for CountingStorage {
        async fn store(
            &self,
            _extension: &str,
            _source: &mut dyn ChunkSource,
        ) -> Result<StoredFile, ApplicationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ApplicationError::Storage("disk full".to_string()))
        }
    }

    fn chunks(data: &[u8]) -> std::vec::IntoIter<Bytes> {
        data.chunks(7)
            .map(Bytes::copy_from_slice)
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn sample_workbook() -> Vec<u8> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "x").unwrap();
        sheet.write_string(0, 1, "y").unwrap();
        for row in 1..=4u32 {
            sheet.write_number(row, 0, row as f64).unwrap();
            sheet.write_number(row, 1, row as f64 * 2.0).unwrap();
        }
        workbook.save_to_buffer().unwrap()
    }

    #[tokio::test]
    async fn unsupported_extension_is_rejected_before_storage() {
        let storage = Arc::new(CountingStorage::default());
        let service = UploadService::new(
            storage.clone(),
            Arc::new(FixedReader(Ok(TabularShape { rows: 1, columns: 1 }))),
        );

        let err = service
            .upload("notes.txt", &mut chunks(b"hello"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::UnsupportedFileType { ref extension } if extension == ".txt"
        ));
        assert_eq!(storage.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn storage_failure_is_surfaced_unchanged() {
        let service = UploadService::new(
            Arc::new(CountingStorage::default()),
            Arc::new(FixedReader(Ok(TabularShape { rows: 1, columns: 1 }))),
        );

        let err = service
            .upload("data.xlsx", &mut chunks(b"irrelevant"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Storage(_)));
    }

    #[tokio::test]
    async fn reader_failure_becomes_invalid_content() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(
            Arc::new(LocalStorageService::new(dir.path().to_path_buf(), 1024, 1024 * 1024)),
            Arc::new(FixedReader(Err(()))),
        );

        let err = service
            .upload("data.xlsx", &mut chunks(b"not a workbook"))
            .await
            .unwrap_err();

        match err {
            ApplicationError::InvalidContent { filename, .. } => {
                assert!(filename.ends_with(".xlsx"));
                assert!(dir.path().join(&filename).exists());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn workbook_is_stored_and_measured() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(
            Arc::new(LocalStorageService::new(dir.path().to_path_buf(), 16, 1024 * 1024)),
            Arc::new(CalamineReader::new(true)),
        );

        let outcome = service
            .upload("Report.XLSX", &mut chunks(&sample_workbook()))
            .await
            .unwrap();

        assert_eq!(outcome.original_filename, "Report.XLSX");
        assert!(outcome.stored.generated_name.ends_with(".XLSX"));
        assert_eq!(outcome.shape, TabularShape { rows: 4, columns: 2 });
        assert!(outcome.stored.path.exists());
    }

    #[tokio::test]
    async fn empty_file_is_invalid_content() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(
            Arc::new(LocalStorageService::new(dir.path().to_path_buf(), 1024, 1024 * 1024)),
            Arc::new(CalamineReader::new(true)),
        );

        let err = service
            .upload("empty.xlsx", &mut Vec::<Bytes>::new().into_iter())
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::InvalidContent { .. }));
    }
}
