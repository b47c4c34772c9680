//! S3-compatible backends built with the object_store crate.
//!
//! Builders are lazy: no request is made until the first operation.

use object_store::{
    aws::AmazonS3Builder, local::LocalFileSystem, ObjectStore as ObjectStoreBackend,
};
use std::sync::Arc;

use super::error::StoreError;

/// Configuration for an S3-compatible storage backend
#[derive(Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub endpoint: String,
    pub allow_http: bool,
}

impl S3Config {
    /// Cloudflare R2: the endpoint is derived from the account id
    pub fn r2(account_id: &str, access_key: &str, secret_key: &str, bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            region: "auto".to_string(),
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            endpoint: format!("https://{}.r2.cloudflarestorage.com", account_id),
            allow_http: false,
        }
    }

    /// Self-hosted MinIO, addressed path-style
    pub fn minio(endpoint: &str, access_key: &str, secret_key: &str, bucket: &str) -> Self {
        let endpoint = with_scheme(endpoint);
        Self {
            bucket: bucket.to_string(),
            region: "us-east-1".to_string(),
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            allow_http: endpoint.starts_with("http://"),
            endpoint,
        }
    }
}

impl std::fmt::Debug for S3Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Config")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("allow_http", &self.allow_http)
            .finish_non_exhaustive()
    }
}

/// Endpoints given without a scheme are reached over TLS
pub fn with_scheme(endpoint: &str) -> String {
    let endpoint = endpoint.trim_end_matches('/');
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("https://{}", endpoint)
    }
}

/// Create an S3 store from configuration
pub fn create_s3_store(config: S3Config) -> Result<Arc<dyn ObjectStoreBackend>, StoreError> {
    let store = AmazonS3Builder::new()
        .with_bucket_name(&config.bucket)
        .with_region(&config.region)
        .with_access_key_id(&config.access_key)
        .with_secret_access_key(&config.secret_key)
        .with_endpoint(&config.endpoint)
        .with_allow_http(config.allow_http)
        .with_virtual_hosted_style_request(false)
        .build()?;

    Ok(Arc::new(store))
}

/// Create a filesystem store rooted at `upload_dir`, creating the directory
pub async fn create_local_store(upload_dir: &str) -> Result<Arc<dyn ObjectStoreBackend>, StoreError> {
    tokio::fs::create_dir_all(upload_dir).await?;
    let store = LocalFileSystem::new_with_prefix(upload_dir)?;
    Ok(Arc::new(store))
}
