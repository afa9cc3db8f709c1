//! Infrastructure layer: blob storage, ledger persistence, config, external AI provider.

pub mod ai;
pub mod config;
pub mod repository;
pub mod service;
pub mod store;

pub use config::{AiConfig, ConfigError, StoreConfig};
pub use repository::LedgerRepository;
pub use service::LedgerService;
pub use store::{BlobStore, InMemoryBlobStore, SqliteBlobStore, StoreError, open_store};
