use async_trait::async_trait;
use bytes::Bytes;

use crate::application::error::ApplicationError;

/// Pull-based byte stream of an upload. `Ok(None)` marks the end.
#[async_trait]
pub trait ChunkSource: Send {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, ApplicationError>;
}

#[async_trait]
impl ChunkSource for std::vec::IntoIter<Bytes> {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, ApplicationError> {
        Ok(self.next())
    }
}
