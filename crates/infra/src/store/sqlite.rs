//! SQLite-backed blob store.
//!
//! One row per collection key. Writes are last-write-wins upserts.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::debug;

use super::{BlobStore, StoreError};

pub struct SqliteBlobStore {
    pool: SqlitePool,
}

impl SqliteBlobStore {
    /// Connect to `url` (e.g. `sqlite://merenda.db` or `sqlite::memory:`), creating the
    /// database file and table if needed.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Each connection to an in-memory database opens its own empty database.
        let max_connections = if url.contains(":memory:") { 1 } else { 4 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS merenda_blobs (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl BlobStore for SqliteBlobStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM merenda_blobs WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn save(&self, key: &str, value: String) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO merenda_blobs (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(&value)
        .execute(&self.pool)
        .await?;

        debug!(key, bytes = value.len(), "blob saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_keeps_one_row_per_key() {
        let store = SqliteBlobStore::connect("sqlite::memory:").await.unwrap();

        assert_eq!(store.load("merendaStockItems").await.unwrap(), None);
        store.save("merendaStockItems", "[]".to_string()).await.unwrap();
        store
            .save("merendaStockItems", r#"[{"name":"Arroz"}]"#.to_string())
            .await
            .unwrap();

        assert_eq!(
            store.load("merendaStockItems").await.unwrap().as_deref(),
            Some(r#"[{"name":"Arroz"}]"#)
        );

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM merenda_blobs")
            .fetch_one(&store.pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let store = SqliteBlobStore::connect("sqlite::memory:").await.unwrap();
        store.save("a", "1".to_string()).await.unwrap();
        store.save("b", "2".to_string()).await.unwrap();

        assert_eq!(store.load("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.load("b").await.unwrap().as_deref(), Some("2"));
    }
}
