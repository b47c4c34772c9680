pub mod file_provider;
pub mod storage;

// Re-export all port traits for convenience
pub use file_provider::FileProvider;
pub use storage::ObjectStore;
