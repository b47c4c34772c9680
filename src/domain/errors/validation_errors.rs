/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyFileKey,
    FileKeyTooLong { actual: usize, max: usize },
    InvalidFileKeyCharacter(char),
    FileKeyStartsWithSlash,
    FileKeyContainsDoubleSlash,
    FileKeyEndsWithSlash,
    FileKeyRelativeSegment,
    UnaddressableFileKey(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyFileKey => write!(f, "File key cannot be empty"),
            ValidationError::FileKeyTooLong { actual, max } => {
                write!(f, "File key too long: {} bytes (max: {})", actual, max)
            }
            ValidationError::InvalidFileKeyCharacter(c) => {
                write!(f, "Invalid character in file key: '{}'", c.escape_default())
            }
            ValidationError::FileKeyStartsWithSlash => {
                write!(f, "File key cannot start with '/'")
            }
            ValidationError::FileKeyContainsDoubleSlash => {
                write!(f, "File key cannot contain '//'")
            }
            ValidationError::FileKeyEndsWithSlash => {
                write!(f, "File key cannot end with '/'")
            }
            ValidationError::FileKeyRelativeSegment => {
                write!(f, "File key cannot contain '.' or '..' segments")
            }
            ValidationError::UnaddressableFileKey(reason) => {
                write!(f, "File key rejected by storage backend: {}", reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
