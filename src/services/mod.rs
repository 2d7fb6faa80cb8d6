mod calamine_reader;
mod error;
mod local_storage;

pub use calamine_reader::CalamineReader;
pub use local_storage::LocalStorageService;
