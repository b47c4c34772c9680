use async_trait::async_trait;

use crate::domain::{
    errors::FileProviderResult,
    models::{FileDeleteRequest, FileUpload, StoredObjectReference},
};

/// The file storage capability as seen by the hosting runtime.
///
/// Implementations hold no per-call state and are shared across concurrent
/// requests.
#[async_trait]
pub trait FileProvider: Send + Sync + 'static {
    /// Implementation id from the registry (`r2`, `minio`, `local`)
    fn identifier(&self) -> &str;

    /// Store a file under a freshly generated key
    async fn upload(&self, file: FileUpload) -> FileProviderResult<StoredObjectReference>;

    /// Delete one or more files, in order. Stops at the first failure.
    async fn delete(&self, request: FileDeleteRequest) -> FileProviderResult<()>;

    /// URL under which a stored file can be fetched. Does not check existence.
    fn get_presigned_download_url(&self, file_key: &str) -> String;
}
