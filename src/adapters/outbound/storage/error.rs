use crate::domain::{errors::StorageError, value_objects::FileKey};
use std::io;
use thiserror::Error as ThisError;

/// Errors raised while constructing a storage backend
#[derive(ThisError, Debug)]
pub enum StoreError {
    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Convert an object_store error raised for `key` during `operation`
pub fn to_storage_error(err: object_store::Error, key: &FileKey, operation: &str) -> StorageError {
    match err {
        object_store::Error::NotFound { .. } => StorageError::ObjectNotFound { key: key.clone() },
        object_store::Error::InvalidPath { source } => StorageError::InvalidKey {
            key: key.clone(),
            reason: source.to_string(),
        },
        object_store::Error::PermissionDenied { .. }
        | object_store::Error::Unauthenticated { .. } => StorageError::AccessDenied {
            key: key.clone(),
            operation: operation.to_string(),
        },
        object_store::Error::NotSupported { .. } | object_store::Error::NotImplemented => {
            StorageError::UnsupportedOperation {
                operation: operation.to_string(),
                reason: err.to_string(),
            }
        }
        _ => StorageError::InfrastructureError {
            message: format!("Failed to {} object: {}", operation, err),
            source: Some(err.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_the_key() {
        let key = FileKey::new("123-gift.png").unwrap();
        let err = object_store::Error::NotFound {
            path: "123-gift.png".to_string(),
            source: "missing".into(),
        };
        assert_eq!(
            to_storage_error(err, &key, "delete"),
            StorageError::ObjectNotFound { key }
        );
    }

    #[test]
    fn invalid_paths_become_invalid_keys() {
        let key = FileKey::new("123-gift.png").unwrap();
        let err = object_store::path::Path::parse("a/../b").unwrap_err();
        match to_storage_error(err.into(), &key, "put") {
            StorageError::InvalidKey { key: rejected, .. } => assert_eq!(rejected, key),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn generic_errors_become_infrastructure_errors() {
        let key = FileKey::new("123-gift.png").unwrap();
        let err = object_store::Error::Generic {
            store: "S3",
            source: "connection reset".into(),
        };
        match to_storage_error(err, &key, "put") {
            StorageError::InfrastructureError { message, source } => {
                assert!(message.starts_with("Failed to put object"));
                assert!(source.unwrap().contains("connection reset"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
