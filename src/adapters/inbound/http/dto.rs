use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{
    errors::{FileProviderError, StorageError},
    models::StoredObjectReference,
};

/// DTO for upload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponseDto {
    pub files: Vec<StoredObjectReference>,
}

/// DTO for retrieval URL response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalUrlDto {
    pub key: String,
    pub url: String,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
    pub timestamp: DateTime<Utc>,
}

/// Success response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponseDto {
    pub message: String,
    pub data: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl From<&FileProviderError> for StatusCode {
    fn from(err: &FileProviderError) -> Self {
        match err {
            FileProviderError::InvalidKey { .. } => StatusCode::BAD_REQUEST,
            FileProviderError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            FileProviderError::Upload { source, .. } | FileProviderError::Delete { source, .. } => {
                match source {
                    StorageError::ObjectNotFound { .. } => StatusCode::NOT_FOUND,
                    StorageError::InvalidKey { .. } => StatusCode::BAD_REQUEST,
                    StorageError::UnsupportedOperation { .. } => StatusCode::NOT_IMPLEMENTED,
                    _ => StatusCode::BAD_GATEWAY,
                }
            }
        }
    }
}

// Error response helpers

impl ErrorResponseDto {
    pub fn from_provider_error(error: &FileProviderError) -> Self {
        let mut details = HashMap::new();

        match error {
            FileProviderError::Configuration { provider, missing } => {
                details.insert(
                    "provider".to_string(),
                    serde_json::Value::String(provider.to_string()),
                );
                details.insert("missing".to_string(), serde_json::json!(missing));
            }
            FileProviderError::InvalidKey { key, .. }
            | FileProviderError::Upload { key, .. }
            | FileProviderError::Delete { key, .. } => {
                details.insert("key".to_string(), serde_json::Value::String(key.clone()));
            }
        }

        ErrorResponseDto {
            error: "FileProviderError".to_string(),
            message: error.to_string(),
            details: Some(details),
            timestamp: Utc::now(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        ErrorResponseDto {
            error: "BadRequest".to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }
}

impl SuccessResponseDto {
    pub fn new(message: &str) -> Self {
        SuccessResponseDto {
            message: message.to_string(),
            data: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_data(message: &str, data: serde_json::Value) -> Self {
        SuccessResponseDto {
            message: message.to_string(),
            data: Some(data),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FileKey;

    #[test]
    fn storage_failures_map_to_bad_gateway() {
        let err = FileProviderError::Upload {
            key: "1-a.png".to_string(),
            source: StorageError::AccessDenied {
                key: FileKey::new("1-a.png").unwrap(),
                operation: "put".to_string(),
            },
        };
        assert_eq!(StatusCode::from(&err), StatusCode::BAD_GATEWAY);

        let dto = ErrorResponseDto::from_provider_error(&err);
        assert_eq!(dto.details.unwrap()["key"], "1-a.png");
    }
}
