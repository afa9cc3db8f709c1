//! Figures shown on the dashboard landing page.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::InventoryLedger;

/// Items expiring within this many days (inclusive) count as "expiring soon".
pub const EXPIRY_WARNING_DAYS: u64 = 30;
/// Window, in days, for "recent" consumption.
pub const RECENT_WINDOW_DAYS: u64 = 7;
/// How many items the stock chart shows.
pub const STOCK_CHART_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub name: String,
    pub quantity: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyConsumption {
    pub date: NaiveDate,
    pub quantity: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stock_item_count: usize,
    pub total_stock_quantity: Decimal,
    pub expiring_soon: usize,
    pub recent_consumption_count: usize,
    /// One entry per day of the recent window, oldest first, today last.
    pub daily_consumption: Vec<DailyConsumption>,
    pub stock_levels: Vec<StockLevel>,
    pub student_count: u32,
}

impl DashboardSummary {
    pub fn compute(ledger: &InventoryLedger, student_count: u32, today: NaiveDate) -> Self {
        let stock = ledger.stock_items();
        let records = ledger.consumption_records();

        let expiry_limit = today + Days::new(EXPIRY_WARNING_DAYS);
        let expiring_soon = stock
            .iter()
            .filter(|i| i.expiry_date >= today && i.expiry_date <= expiry_limit)
            .count();

        let recent_since = today - Days::new(RECENT_WINDOW_DAYS);
        let recent_consumption_count = records.iter().filter(|r| r.date >= recent_since).count();

        let daily_consumption = (0..RECENT_WINDOW_DAYS)
            .rev()
            .map(|back| {
                let date = today - Days::new(back);
                let quantity = records
                    .iter()
                    .filter(|r| r.date == date)
                    .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.total_quantity()));
                DailyConsumption { date, quantity }
            })
            .collect();

        Self {
            stock_item_count: stock.len(),
            total_stock_quantity: stock
                .iter()
                .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.quantity)),
            expiring_soon,
            recent_consumption_count,
            daily_consumption,
            stock_levels: stock
                .iter()
                .take(STOCK_CHART_LIMIT)
                .map(|i| StockLevel {
                    name: i.name.clone(),
                    quantity: i.quantity,
                })
                .collect(),
            student_count,
        }
    }
}
