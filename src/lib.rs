pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - capability registry, file models and errors
pub use domain::{
    Capability, CapabilityDescriptor, FileDeleteRequest, FileKey, FileProviderError, FileUpload,
    PluginDescriptor, ProviderRegistry, PublicBaseUrl, StorageError, StoredObjectReference,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{FileProvider, ObjectStore};

// Registry assembly
pub use config::EnvSnapshot;
pub use services::assemble;

// Application factory and configuration
pub use app::{
    create_app_from_env, create_file_provider, create_in_memory_app, AppBuilder, AppError,
    AppServices,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    file::{validate_r2_options, ObjectStorageFileProvider},
    storage::ApacheObjectStoreAdapter,
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        assemble, create_in_memory_app, ApacheObjectStoreAdapter, AppBuilder, AppServices,
        Capability, CapabilityDescriptor, EnvSnapshot, FileDeleteRequest, FileProvider,
        FileUpload, ObjectStorageFileProvider, ProviderRegistry, StoredObjectReference,
    };
}
