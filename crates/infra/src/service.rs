//! Ledger ownership for the async layer.
//!
//! One lock, one writer: every operation runs to completion under the lock and
//! persists what it touched before releasing it. A failed save is logged and
//! never undoes the in-memory change.

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use merenda_core::StockItemId;
use merenda_inventory::{
    ConsumptionRecord, DashboardSummary, DateRange, InventoryLedger, LedgerError, NewConsumption,
    NewStockItem, SpendingSummary, StockItem,
};

use crate::repository::LedgerRepository;
use crate::store::{BlobStore, StoreError};

struct State {
    ledger: InventoryLedger,
    student_count: u32,
}

/// Point-in-time copy of everything the ledger holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub stock: Vec<StockItem>,
    pub records: Vec<ConsumptionRecord>,
    pub student_count: u32,
}

pub struct LedgerService<S> {
    state: Mutex<State>,
    repository: LedgerRepository<S>,
}

impl<S> LedgerService<S>
where
    S: BlobStore,
{
    /// Load persisted state (or start empty) and take ownership of it.
    pub async fn open(store: S) -> Self {
        let repository = LedgerRepository::new(store);
        let ledger = repository.load_ledger().await;
        let student_count = repository.load_student_count().await;

        info!(
            stock_items = ledger.stock_items().len(),
            consumption_records = ledger.consumption_records().len(),
            student_count,
            "ledger loaded"
        );

        Self {
            state: Mutex::new(State {
                ledger,
                student_count,
            }),
            repository,
        }
    }

    pub async fn stock_items(&self) -> Vec<StockItem> {
        self.state.lock().await.ledger.stock_items().to_vec()
    }

    pub async fn stock_item(&self, id: StockItemId) -> Option<StockItem> {
        self.state.lock().await.ledger.find_stock_item(&id).cloned()
    }

    #[instrument(skip_all, fields(name = %item.name))]
    pub async fn add_stock_item(&self, item: NewStockItem) -> StockItem {
        let mut state = self.state.lock().await;
        let added = state.ledger.add_stock_item(item);
        info!(item_id = %added.id, "stock item added");

        self.persist_stock(&state.ledger).await;
        added
    }

    #[instrument(skip_all, fields(item_id = %item.id))]
    pub async fn update_stock_item(&self, item: StockItem) -> Result<StockItem, LedgerError> {
        let mut state = self.state.lock().await;
        let updated = state.ledger.update_stock_item(item)?;
        info!("stock item updated");

        self.persist_stock(&state.ledger).await;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_stock_item(&self, id: StockItemId) -> Result<StockItem, LedgerError> {
        let mut state = self.state.lock().await;
        let removed = state.ledger.delete_stock_item(id)?;
        info!(name = %removed.name, "stock item deleted");

        self.persist_stock(&state.ledger).await;
        Ok(removed)
    }

    pub async fn consumption_records(&self) -> Vec<ConsumptionRecord> {
        self.state.lock().await.ledger.consumption_records().to_vec()
    }

    #[instrument(skip_all, fields(class = %consumption.class_or_student, lines = consumption.items.len()))]
    pub async fn record_consumption(
        &self,
        consumption: NewConsumption,
    ) -> Result<ConsumptionRecord, LedgerError> {
        let mut state = self.state.lock().await;
        let record = match state.ledger.record_consumption(consumption) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "consumption rejected");
                return Err(e);
            }
        };
        info!(record_id = %record.id, total_cost = %record.total_cost, "consumption recorded");

        self.persist_records(&state.ledger).await;
        self.persist_stock(&state.ledger).await;
        Ok(record)
    }

    pub async fn student_count(&self) -> u32 {
        self.state.lock().await.student_count
    }

    #[instrument(skip(self))]
    pub async fn set_student_count(&self, count: u32) -> u32 {
        let mut state = self.state.lock().await;
        state.student_count = count;

        log_save_failure(
            "student count",
            self.repository.save_student_count(count).await,
        );
        count
    }

    pub async fn dashboard(&self, today: NaiveDate) -> DashboardSummary {
        let state = self.state.lock().await;
        DashboardSummary::compute(&state.ledger, state.student_count, today)
    }

    pub async fn spending_summary(&self, range: DateRange, top_n: usize) -> SpendingSummary {
        let state = self.state.lock().await;
        SpendingSummary::compute(state.ledger.consumption_records(), range, top_n)
    }

    /// Copy out the current state, e.g. to feed an AI flow outside the lock.
    pub async fn snapshot(&self) -> LedgerSnapshot {
        let state = self.state.lock().await;
        LedgerSnapshot {
            stock: state.ledger.stock_items().to_vec(),
            records: state.ledger.consumption_records().to_vec(),
            student_count: state.student_count,
        }
    }

    async fn persist_stock(&self, ledger: &InventoryLedger) {
        log_save_failure(
            "stock items",
            self.repository.save_stock(ledger.stock_items()).await,
        );
    }

    async fn persist_records(&self, ledger: &InventoryLedger) {
        log_save_failure(
            "consumption records",
            self.repository
                .save_records(ledger.consumption_records())
                .await,
        );
    }
}

fn log_save_failure(collection: &str, result: Result<(), StoreError>) {
    if let Err(e) = result {
        warn!(collection, error = %e, "failed to persist; in-memory state kept");
    }
}
