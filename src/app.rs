use object_store::{memory::InMemory, ObjectStore as ObjectStoreBackend};
use std::{path::PathBuf, sync::Arc};
use tracing::{error, info};

use crate::{
    adapters::outbound::{
        file::{
            validate_local_options, validate_minio_options, validate_r2_options,
            ObjectStorageFileProvider,
        },
        storage::{create_local_store, create_s3_store, ApacheObjectStoreAdapter, S3Config},
    },
    config::EnvSnapshot,
    domain::{
        errors::FileProviderError,
        models::{CapabilityDescriptor, ProviderRegistry},
    },
    ports::{file_provider::FileProvider, storage::ObjectStore},
    services::assemble,
};

/// Application services container
#[derive(Clone)]
pub struct AppServices {
    pub registry: Arc<ProviderRegistry>,
    pub file_provider: Arc<dyn FileProvider>,
    /// Directory the local file provider writes to, served over HTTP
    pub static_dir: Option<PathBuf>,
}

/// Instantiates the adapters selected by a provider registry
pub struct AppBuilder {
    registry: Option<ProviderRegistry>,
    backend_override: Option<Arc<dyn ObjectStoreBackend>>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            registry: None,
            backend_override: None,
        }
    }

    /// Use an already assembled registry
    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Assemble the registry from an environment snapshot
    pub fn with_env(self, env: &EnvSnapshot) -> Self {
        self.with_registry(assemble(env))
    }

    /// Replace the storage backend the file provider talks to. Options are
    /// still validated; only the network client is swapped.
    pub fn with_backend_store(mut self, store: Arc<dyn ObjectStoreBackend>) -> Self {
        self.backend_override = Some(store);
        self
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let registry = self
            .registry
            .unwrap_or_else(|| assemble(&EnvSnapshot::new()));

        let descriptor = registry
            .file_storage()
            .ok_or_else(|| AppError::Configuration {
                message: "No file storage provider in registry".to_string(),
            })?;

        let static_dir = match descriptor {
            CapabilityDescriptor::LocalFile(options) if self.backend_override.is_none() => {
                options.upload_dir.as_deref().map(PathBuf::from)
            }
            _ => None,
        };

        let file_provider = create_file_provider(descriptor, self.backend_override).await?;
        info!(
            provider = file_provider.identifier(),
            "File provider ready"
        );

        Ok(AppServices {
            registry: Arc::new(registry),
            file_provider,
            static_dir,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Construct the file provider a file storage descriptor selects
pub async fn create_file_provider(
    descriptor: &CapabilityDescriptor,
    backend_override: Option<Arc<dyn ObjectStoreBackend>>,
) -> Result<Arc<dyn FileProvider>, AppError> {
    let provider = match descriptor {
        CapabilityDescriptor::R2File(options) => {
            let options = validate_r2_options(options).map_err(configuration_error)?;
            let backend = match backend_override {
                Some(store) => store,
                None => create_s3_store(S3Config::r2(
                    &options.account_id,
                    &options.access_key_id,
                    &options.secret_access_key,
                    &options.bucket,
                ))
                .map_err(storage_init_error)?,
            };
            ObjectStorageFileProvider::r2(adapter(backend), options)
        }
        CapabilityDescriptor::MinioFile(options) => {
            let options = validate_minio_options(options).map_err(configuration_error)?;
            let backend = match backend_override {
                Some(store) => store,
                None => create_s3_store(S3Config::minio(
                    &options.endpoint,
                    &options.access_key,
                    &options.secret_key,
                    &options.bucket,
                ))
                .map_err(storage_init_error)?,
            };
            ObjectStorageFileProvider::minio(adapter(backend), options)
        }
        CapabilityDescriptor::LocalFile(options) => {
            let options = validate_local_options(options).map_err(configuration_error)?;
            let store: Arc<dyn ObjectStore> = match backend_override {
                Some(store) => adapter(store),
                None => {
                    let backend = create_local_store(&options.upload_dir)
                        .await
                        .map_err(storage_init_error)?;
                    Arc::new(ApacheObjectStoreAdapter::without_content_type(backend))
                }
            };
            ObjectStorageFileProvider::local(store, options)
        }
        other => {
            return Err(AppError::Configuration {
                message: format!(
                    "'{}' is not a file storage provider",
                    other.implementation_id()
                ),
            })
        }
    };

    Ok(Arc::new(provider))
}

fn adapter(backend: Arc<dyn ObjectStoreBackend>) -> Arc<dyn ObjectStore> {
    Arc::new(ApacheObjectStoreAdapter::new(backend))
}

fn configuration_error(err: FileProviderError) -> AppError {
    error!(error = %err, "File provider options rejected");
    AppError::Configuration {
        message: err.to_string(),
    }
}

fn storage_init_error(err: impl std::fmt::Display) -> AppError {
    error!(error = %err, "Failed to initialize storage backend");
    AppError::StorageInit {
        message: err.to_string(),
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },
}

/// Create an application backed by an in-memory store, for tests and
/// development. The registry is assembled from an empty environment.
pub async fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_backend_store(Arc::new(InMemory::new()))
        .build()
        .await
}

/// Create application from environment variables
pub async fn create_app_from_env() -> Result<AppServices, AppError> {
    let env = EnvSnapshot::from_process_env();
    AppBuilder::new().with_env(&env).build().await
}
