//! Inventory domain module: stock items, consumption records and the ledger
//! that reconciles one against the other.
//!
//! This crate contains business rules only (no IO, no HTTP, no storage).

pub mod consumption;
pub mod dashboard;
pub mod date;
pub mod ledger;
pub mod report;
pub mod stock;

pub use consumption::{ConsumptionItem, ConsumptionLine, ConsumptionRecord, NewConsumption};
pub use dashboard::{DailyConsumption, DashboardSummary, StockLevel};
pub use ledger::{InventoryLedger, LedgerCommand, LedgerError, LedgerEvent};
pub use merenda_core::DateRange;
pub use report::{ItemSpend, SpendingSummary, records_in};
pub use stock::{MAX_AMOUNT, NewStockItem, StockItem};

pub use rust_decimal::Decimal;
