use super::{StorageError, ValidationError};

/// Errors surfaced by a file provider to the hosting runtime
#[derive(Debug, Clone, PartialEq)]
pub enum FileProviderError {
    /// Required options are missing or empty. Raised before any client exists.
    Configuration {
        provider: &'static str,
        missing: Vec<&'static str>,
    },

    /// The key produced for or supplied to an operation is not storable
    InvalidKey {
        key: String,
        reason: ValidationError,
    },

    /// The backing store rejected an upload
    Upload { key: String, source: StorageError },

    /// The backing store rejected a delete. Earlier entries of the same
    /// batch may already be gone.
    Delete { key: String, source: StorageError },
}

impl FileProviderError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, FileProviderError::Configuration { .. })
    }
}

impl std::fmt::Display for FileProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileProviderError::Configuration { provider, missing } => {
                write!(
                    f,
                    "Invalid {} file provider options: missing {}",
                    provider,
                    missing.join(", ")
                )
            }
            FileProviderError::InvalidKey { key, reason } => {
                write!(f, "Invalid file key '{}': {}", key, reason)
            }
            FileProviderError::Upload { key, source } => {
                write!(f, "Failed to upload '{}': {}", key, source)
            }
            FileProviderError::Delete { key, source } => {
                write!(f, "Failed to delete '{}': {}", key, source)
            }
        }
    }
}

impl std::error::Error for FileProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileProviderError::InvalidKey { reason, .. } => Some(reason),
            FileProviderError::Upload { source, .. } | FileProviderError::Delete { source, .. } => {
                Some(source)
            }
            FileProviderError::Configuration { .. } => None,
        }
    }
}

/// Result type for file provider operations
pub type FileProviderResult<T> = Result<T, FileProviderError>;
