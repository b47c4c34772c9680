use crate::domain::errors::ValidationError;

const MAX_KEY_BYTES: usize = 1024;

/// A validated key of a stored file inside the bucket.
///
/// Valid keys address an object under exactly the same string, so characters
/// such as `~`, `%` or `#` are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileKey(String);

impl FileKey {
    /// Create a new FileKey with validation
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValidationError::EmptyFileKey);
        }

        if value.len() > MAX_KEY_BYTES {
            return Err(ValidationError::FileKeyTooLong {
                actual: value.len(),
                max: MAX_KEY_BYTES,
            });
        }

        if let Some(c) = value.chars().find(char::is_ascii_control) {
            return Err(ValidationError::InvalidFileKeyCharacter(c));
        }

        if value.starts_with('/') {
            return Err(ValidationError::FileKeyStartsWithSlash);
        }

        if value.ends_with('/') {
            return Err(ValidationError::FileKeyEndsWithSlash);
        }

        if value.contains("//") {
            return Err(ValidationError::FileKeyContainsDoubleSlash);
        }

        if value.split('/').any(|segment| segment == "." || segment == "..") {
            return Err(ValidationError::FileKeyRelativeSegment);
        }

        Ok(Self(value))
    }

    /// Build the key for a fresh upload: `<unix millis>-<original filename>`.
    ///
    /// Two uploads of the same filename within the same millisecond collide.
    pub fn timestamped(timestamp_millis: i64, filename: &str) -> Result<Self, ValidationError> {
        Self::new(format!("{}-{}", timestamp_millis, filename))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for FileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FileKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
