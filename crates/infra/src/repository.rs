//! Ledger state ⇄ blob store.
//!
//! Each collection is one JSON blob. Anything unreadable loads as empty (or the
//! default student count) and is logged; the next save overwrites it.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use merenda_inventory::{ConsumptionRecord, InventoryLedger, StockItem};

use crate::store::{BlobStore, StoreError};

pub const STOCK_ITEMS_KEY: &str = "merendaStockItems";
pub const CONSUMPTION_RECORDS_KEY: &str = "merendaConsumptionRecords";
pub const STUDENT_COUNT_KEY: &str = "merendaStudentCount";
pub const DEFAULT_STUDENT_COUNT: u32 = 100;

#[derive(Debug, Clone)]
pub struct LedgerRepository<S> {
    store: S,
}

impl<S> LedgerRepository<S>
where
    S: BlobStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn load_ledger(&self) -> InventoryLedger {
        let stock: Vec<StockItem> = self.load_or_default(STOCK_ITEMS_KEY).await;
        let records: Vec<ConsumptionRecord> = self.load_or_default(CONSUMPTION_RECORDS_KEY).await;
        InventoryLedger::restore(stock, records)
    }

    pub async fn load_student_count(&self) -> u32 {
        self.load_value::<u32>(STUDENT_COUNT_KEY)
            .await
            .unwrap_or(DEFAULT_STUDENT_COUNT)
    }

    pub async fn save_stock(&self, items: &[StockItem]) -> Result<(), StoreError> {
        self.save_value(STOCK_ITEMS_KEY, &items).await
    }

    pub async fn save_records(&self, records: &[ConsumptionRecord]) -> Result<(), StoreError> {
        self.save_value(CONSUMPTION_RECORDS_KEY, &records).await
    }

    pub async fn save_student_count(&self, count: u32) -> Result<(), StoreError> {
        self.save_value(STUDENT_COUNT_KEY, &count).await
    }

    async fn load_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        self.load_value(key).await.unwrap_or_default()
    }

    async fn load_value<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let raw = match self.store.load(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read blob; using default");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "unparseable blob; using default");
                None
            }
        }
    }

    async fn save_value<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value)?;
        self.store.save(key, json).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use merenda_inventory::NewStockItem;

    use super::*;
    use crate::store::InMemoryBlobStore;

    fn arroz() -> NewStockItem {
        NewStockItem {
            name: "Arroz".to_string(),
            quantity: Decimal::new(10, 0),
            unit: "kg".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            supplier: "Coop".to_string(),
            cost: Some(Decimal::new(2, 0)),
        }
    }

    #[tokio::test]
    async fn empty_store_loads_empty_ledger_and_default_count() {
        let repo = LedgerRepository::new(InMemoryBlobStore::new());

        let ledger = repo.load_ledger().await;
        assert!(ledger.stock_items().is_empty());
        assert!(ledger.consumption_records().is_empty());
        assert_eq!(repo.load_student_count().await, DEFAULT_STUDENT_COUNT);
    }

    #[tokio::test]
    async fn corrupt_blobs_load_as_empty() {
        let store = InMemoryBlobStore::new()
            .with_blob(STOCK_ITEMS_KEY, "{not json")
            .with_blob(CONSUMPTION_RECORDS_KEY, "42")
            .with_blob(STUDENT_COUNT_KEY, "\"many\"");
        let repo = LedgerRepository::new(store);

        let ledger = repo.load_ledger().await;
        assert!(ledger.stock_items().is_empty());
        assert!(ledger.consumption_records().is_empty());
        assert_eq!(repo.load_student_count().await, DEFAULT_STUDENT_COUNT);
    }

    #[tokio::test]
    async fn saved_collections_load_back() {
        let repo = LedgerRepository::new(InMemoryBlobStore::new());
        let mut ledger = InventoryLedger::new();
        let item = ledger.add_stock_item(arroz());

        repo.save_stock(ledger.stock_items()).await.unwrap();
        repo.save_student_count(250).await.unwrap();

        let loaded = repo.load_ledger().await;
        assert_eq!(loaded.find_stock_item(&item.id), Some(&item));
        assert_eq!(repo.load_student_count().await, 250);
    }

    #[tokio::test]
    async fn stock_blob_uses_camel_case_layout() {
        let repo = LedgerRepository::new(InMemoryBlobStore::new());
        let mut ledger = InventoryLedger::new();
        ledger.add_stock_item(arroz());
        repo.save_stock(ledger.stock_items()).await.unwrap();

        let raw = repo.store().load(STOCK_ITEMS_KEY).await.unwrap().unwrap();
        assert!(raw.contains("\"expiryDate\":\"2025-12-31\""));
    }
}
