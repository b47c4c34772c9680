use async_trait::async_trait;
use bytes::Bytes;
use object_store::{
    path::Path as ObjectPath, Attribute, Attributes, ObjectStore as ApacheObjectStore,
    PutOptions, PutPayload,
};
use std::sync::Arc;
use tracing::debug;

use super::error::to_storage_error;
use crate::{
    domain::{errors::StorageResult, value_objects::FileKey},
    ports::storage::ObjectStore,
};

/// Adapter that implements our ObjectStore trait using Apache object_store
pub struct ApacheObjectStoreAdapter {
    inner: Arc<dyn ApacheObjectStore>,
    forward_content_type: bool,
}

impl ApacheObjectStoreAdapter {
    pub fn new(store: Arc<dyn ApacheObjectStore>) -> Self {
        Self {
            inner: store,
            forward_content_type: true,
        }
    }

    /// For backends that reject object attributes, such as the local filesystem
    pub fn without_content_type(store: Arc<dyn ApacheObjectStore>) -> Self {
        Self {
            inner: store,
            forward_content_type: false,
        }
    }

    fn put_options(&self, content_type: Option<&str>) -> PutOptions {
        let mut attributes = Attributes::new();
        if self.forward_content_type {
            if let Some(ct) = content_type.filter(|ct| !ct.is_empty()) {
                attributes.insert(Attribute::ContentType, ct.to_string().into());
            }
        }

        PutOptions {
            attributes,
            ..Default::default()
        }
    }
}

/// Path addressing the object stored under exactly `key`, without percent-encoding
fn object_path(key: &FileKey, operation: &str) -> StorageResult<ObjectPath> {
    ObjectPath::parse(key.as_str()).map_err(|e| to_storage_error(e.into(), key, operation))
}

#[async_trait]
impl ObjectStore for ApacheObjectStoreAdapter {
    async fn put_object(
        &self,
        key: &FileKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        let path = object_path(key, "put")?;
        let payload = PutPayload::from(data);

        self.inner
            .put_opts(&path, payload, self.put_options(content_type))
            .await
            .map_err(|e| to_storage_error(e, key, "put"))?;

        Ok(())
    }

    async fn delete_object(&self, key: &FileKey) -> StorageResult<()> {
        let path = object_path(key, "delete")?;

        match self.inner.delete(&path).await {
            Ok(()) => Ok(()),
            // S3 deletes are idempotent; the local filesystem reports missing objects
            Err(object_store::Error::NotFound { .. }) => {
                debug!(key = %key, "Object already absent");
                Ok(())
            }
            Err(e) => Err(to_storage_error(e, key, "delete")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    #[tokio::test]
    async fn put_stores_bytes_and_content_type() {
        let backend = Arc::new(InMemory::new());
        let adapter = ApacheObjectStoreAdapter::new(backend.clone());
        let key = FileKey::new("1-gift.png").unwrap();

        adapter
            .put_object(&key, Bytes::from_static(b"png"), Some("image/png"))
            .await
            .unwrap();

        let result = backend.get(&ObjectPath::parse("1-gift.png").unwrap()).await.unwrap();
        assert_eq!(
            result
                .attributes
                .get(&Attribute::ContentType)
                .map(|v| AsRef::<str>::as_ref(v)),
            Some("image/png")
        );
        assert_eq!(result.bytes().await.unwrap(), Bytes::from_static(b"png"));
    }

    #[tokio::test]
    async fn keys_are_stored_verbatim() {
        let backend = Arc::new(InMemory::new());
        let adapter = ApacheObjectStoreAdapter::new(backend.clone());

        for raw in ["1-photo~1.png", "2-50%off.png", "3-tag#1.png", "4-{draft} [v2].png"] {
            let key = FileKey::new(raw).unwrap();
            adapter
                .put_object(&key, Bytes::from_static(b"png"), None)
                .await
                .unwrap();

            let meta = backend.head(&ObjectPath::parse(raw).unwrap()).await.unwrap();
            assert_eq!(meta.location.to_string(), raw);
        }

        adapter
            .delete_object(&FileKey::new("1-photo~1.png").unwrap())
            .await
            .unwrap();
        assert!(backend
            .head(&ObjectPath::parse("1-photo~1.png").unwrap())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn delete_of_missing_object_succeeds() {
        let adapter = ApacheObjectStoreAdapter::new(Arc::new(InMemory::new()));
        let key = FileKey::new("never-uploaded.png").unwrap();

        assert!(adapter.delete_object(&key).await.is_ok());
    }
}
