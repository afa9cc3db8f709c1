//! Key → JSON text storage, one key per collection.

pub mod blob_store;
pub mod sqlite;

use std::sync::Arc;

use tracing::{info, warn};

pub use blob_store::{BlobStore, InMemoryBlobStore, StoreError};
pub use sqlite::SqliteBlobStore;

use crate::config::StoreConfig;

/// Open the store named by `config`, or an in-memory one when no database is configured.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn BlobStore>, StoreError> {
    match &config.database_url {
        Some(url) => {
            let store = SqliteBlobStore::connect(url).await?;
            info!("using sqlite blob store");
            Ok(Arc::new(store))
        }
        None => {
            warn!("MERENDA_DATABASE_URL not set; data lives in memory and is lost on restart");
            Ok(Arc::new(InMemoryBlobStore::new()))
        }
    }
}
