mod chunk_source;
mod point_generator;
mod storage_service;
mod tabular_reader;
mod upload_service;

pub use chunk_source::ChunkSource;
pub use point_generator::generate_points;
pub use storage_service::StorageService;
pub use tabular_reader::{ReadError, TabularReader};
pub use upload_service::{UploadOutcome, UploadService};
