use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A file handed to a provider for upload
#[derive(Debug, Clone, bon::Builder)]
pub struct FileUpload {
    #[builder(into)]
    pub filename: String,
    #[builder(into)]
    pub mime_type: String,
    #[builder(into)]
    pub content: Bytes,
}

/// Where an uploaded file ended up. The object store is the system of record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObjectReference {
    pub key: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDeleteTarget {
    #[serde(rename = "fileKey")]
    pub file_key: String,
}

/// One file or a batch of files to delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileDeleteRequest {
    One(FileDeleteTarget),
    Many(Vec<FileDeleteTarget>),
}

impl FileDeleteRequest {
    pub fn single(file_key: impl Into<String>) -> Self {
        FileDeleteRequest::One(FileDeleteTarget {
            file_key: file_key.into(),
        })
    }

    pub fn many<I, S>(file_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FileDeleteRequest::Many(
            file_keys
                .into_iter()
                .map(|file_key| FileDeleteTarget {
                    file_key: file_key.into(),
                })
                .collect(),
        )
    }

    /// Keys in request order
    pub fn into_keys(self) -> Vec<String> {
        match self {
            FileDeleteRequest::One(target) => vec![target.file_key],
            FileDeleteRequest::Many(targets) => targets.into_iter().map(|t| t.file_key).collect(),
        }
    }
}

impl From<&str> for FileDeleteRequest {
    fn from(file_key: &str) -> Self {
        FileDeleteRequest::single(file_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_request_accepts_both_shapes() {
        let one: FileDeleteRequest =
            serde_json::from_str(r#"{"fileKey":"a"}"#).unwrap();
        assert_eq!(one.into_keys(), vec!["a"]);

        let many: FileDeleteRequest =
            serde_json::from_str(r#"[{"fileKey":"a"},{"fileKey":"b"}]"#).unwrap();
        assert_eq!(many.into_keys(), vec!["a", "b"]);
    }

    #[test]
    fn upload_builder_converts_content() {
        let upload = FileUpload::builder()
            .filename("gift.png")
            .mime_type("image/png")
            .content(vec![0x89, 0x50, 0x4e, 0x47])
            .build();
        assert_eq!(upload.content.len(), 4);
        assert_eq!(upload.filename, "gift.png");
    }
}
