use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use super::options::{ValidatedLocalOptions, ValidatedMinioOptions, ValidatedR2Options};
use crate::{
    adapters::outbound::storage::s3::with_scheme,
    domain::{
        errors::{FileProviderError, FileProviderResult, StorageError, ValidationError},
        models::{FileDeleteRequest, FileUpload, StoredObjectReference},
        value_objects::{FileKey, PublicBaseUrl},
    },
    ports::{file_provider::FileProvider, storage::ObjectStore},
};

/// File provider over any object storage backend.
///
/// Every field is fixed at construction; calls share nothing mutable.
#[derive(Clone)]
pub struct ObjectStorageFileProvider {
    identifier: &'static str,
    store: Arc<dyn ObjectStore>,
    bucket: String,
    public_base: PublicBaseUrl,
}

impl ObjectStorageFileProvider {
    pub fn new(
        identifier: &'static str,
        store: Arc<dyn ObjectStore>,
        bucket: impl Into<String>,
        public_base: PublicBaseUrl,
    ) -> Self {
        Self {
            identifier,
            store,
            bucket: bucket.into(),
            public_base,
        }
    }

    pub fn r2(store: Arc<dyn ObjectStore>, options: ValidatedR2Options) -> Self {
        Self::new("r2", store, options.bucket, options.public_url)
    }

    /// Files are served path-style from the MinIO endpoint
    pub fn minio(store: Arc<dyn ObjectStore>, options: ValidatedMinioOptions) -> Self {
        let public_base =
            PublicBaseUrl::new(format!("{}/{}", with_scheme(&options.endpoint), options.bucket));
        Self::new("minio", store, options.bucket, public_base)
    }

    /// Files are served by the backend from the upload directory
    pub fn local(store: Arc<dyn ObjectStore>, options: ValidatedLocalOptions) -> Self {
        Self::new("local", store, options.upload_dir, options.backend_url)
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn public_base(&self) -> &PublicBaseUrl {
        &self.public_base
    }
}

#[async_trait]
impl FileProvider for ObjectStorageFileProvider {
    fn identifier(&self) -> &str {
        self.identifier
    }

    #[instrument(skip_all, fields(provider = self.identifier, bucket = %self.bucket, filename = %file.filename))]
    async fn upload(&self, file: FileUpload) -> FileProviderResult<StoredObjectReference> {
        let key = FileKey::timestamped(Utc::now().timestamp_millis(), &file.filename).map_err(
            |reason| {
                error!(error = %reason, "Rejected upload key");
                FileProviderError::InvalidKey {
                    key: file.filename.clone(),
                    reason,
                }
            },
        )?;

        let size = file.content.len();
        let content_type = Some(file.mime_type.as_str()).filter(|ct| !ct.is_empty());

        if let Err(source) = self.store.put_object(&key, file.content, content_type).await {
            error!(key = %key, error = %source, "Error uploading file to object storage");
            return Err(match source {
                StorageError::InvalidKey { reason, .. } => unaddressable(key.into_string(), reason),
                source => FileProviderError::Upload {
                    key: key.into_string(),
                    source,
                },
            });
        }

        let url = self.public_base.join(key.as_str());
        info!(key = %key, size, "Uploaded file");

        Ok(StoredObjectReference {
            key: key.into_string(),
            url,
        })
    }

    #[instrument(skip_all, fields(provider = self.identifier, bucket = %self.bucket))]
    async fn delete(&self, request: FileDeleteRequest) -> FileProviderResult<()> {
        // Sequential; a failure leaves earlier entries deleted
        for file_key in request.into_keys() {
            let key = FileKey::new(file_key.as_str()).map_err(|reason| {
                error!(key = %file_key, error = %reason, "Rejected delete key");
                FileProviderError::InvalidKey {
                    key: file_key.clone(),
                    reason,
                }
            })?;

            if let Err(source) = self.store.delete_object(&key).await {
                error!(key = %key, error = %source, "Error deleting file from object storage");
                return Err(match source {
                    StorageError::InvalidKey { reason, .. } => unaddressable(file_key, reason),
                    source => FileProviderError::Delete {
                        key: file_key,
                        source,
                    },
                });
            }

            debug!(key = %key, "Deleted file");
        }

        Ok(())
    }

    fn get_presigned_download_url(&self, file_key: &str) -> String {
        self.public_base.join(file_key)
    }
}

fn unaddressable(key: String, reason: String) -> FileProviderError {
    FileProviderError::InvalidKey {
        key,
        reason: ValidationError::UnaddressableFileKey(reason),
    }
}
