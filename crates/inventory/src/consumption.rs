use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use merenda_core::{ConsumptionRecordId, Entity, StockItemId};

/// One consumed line of a committed record.
///
/// `item_name` and `unit` are copies taken from the stock item at commit time, so
/// the record keeps displaying correctly after the stock item is edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionItem {
    pub item_id: StockItemId,
    pub item_name: String,
    pub quantity_consumed: Decimal,
    pub unit: String,
    /// Unit cost frozen at commit time.
    #[serde(default)]
    pub cost_at_time_of_consumption: Decimal,
}

impl ConsumptionItem {
    /// Quantity times frozen unit cost, `None` if it does not fit a `Decimal`.
    pub fn checked_line_cost(&self) -> Option<Decimal> {
        self.cost_at_time_of_consumption
            .checked_mul(self.quantity_consumed)
    }

    /// Like [`checked_line_cost`](Self::checked_line_cost), clamped for display
    /// figures built from stored records.
    pub fn line_cost(&self) -> Decimal {
        self.cost_at_time_of_consumption
            .saturating_mul(self.quantity_consumed)
    }
}

/// Immutable log entry of what a class or student group consumed on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionRecord {
    pub id: ConsumptionRecordId,
    #[serde(with = "crate::date::flexible")]
    pub date: NaiveDate,
    pub class_or_student: String,
    pub number_of_students: u32,
    pub items: Vec<ConsumptionItem>,
    #[serde(default)]
    pub total_cost: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ConsumptionRecord {
    /// Sum of consumed quantities across all lines, regardless of unit.
    pub fn total_quantity(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.quantity_consumed))
    }
}

impl Entity for ConsumptionRecord {
    type Id = ConsumptionRecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A requested line: which stock item and how much of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionLine {
    pub item_id: StockItemId,
    /// Caller's copy of the name. Only used to report a missing item; the
    /// committed record takes the name from stock.
    #[serde(default)]
    pub item_name: String,
    pub quantity_consumed: Decimal,
}

/// A consumption event as submitted, before validation against stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConsumption {
    #[serde(with = "crate::date::flexible")]
    pub date: NaiveDate,
    pub class_or_student: String,
    pub number_of_students: u32,
    pub items: Vec<ConsumptionLine>,
    #[serde(default)]
    pub notes: Option<String>,
}
