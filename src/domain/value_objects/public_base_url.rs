/// Public base URL under which stored files are served.
///
/// Trailing slashes are stripped on construction so that joining with a key
/// always produces exactly one separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicBaseUrl(String);

impl PublicBaseUrl {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim_end_matches('/').to_string())
    }

    /// Compose the retrieval URL for a key. No network access.
    pub fn join(&self, key: &str) -> String {
        format!("{}/{}", self.0, key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PublicBaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
