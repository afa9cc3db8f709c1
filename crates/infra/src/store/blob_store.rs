use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Whole-collection storage. A save replaces the previous value for the key.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn save(&self, key: &str, value: String) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> BlobStore for Arc<S>
where
    S: BlobStore + ?Sized,
{
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key).await
    }

    async fn save(&self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).save(key, value).await
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key, e.g. with a hand-written blob in tests.
    pub fn with_blob(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        self
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(key).cloned())
    }

    async fn save(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_replaces_previous_value() {
        let store = InMemoryBlobStore::new();
        assert_eq!(store.load("k").await.unwrap(), None);

        store.save("k", "[1]".to_string()).await.unwrap();
        store.save("k", "[2]".to_string()).await.unwrap();
        assert_eq!(store.load("k").await.unwrap().as_deref(), Some("[2]"));
    }
}
