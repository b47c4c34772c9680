use crate::domain::{errors::StorageResult, value_objects::FileKey};
use async_trait::async_trait;
use bytes::Bytes;

/// Port for object storage operations
/// This abstracts the actual storage backend (R2, MinIO, local disk, etc.)
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Store object data
    async fn put_object(
        &self,
        key: &FileKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<()>;

    /// Delete object data
    async fn delete_object(&self, key: &FileKey) -> StorageResult<()>;
}
