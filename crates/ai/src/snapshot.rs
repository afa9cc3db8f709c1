//! Plain inputs for flows. Callers map their own models into these.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSnapshot {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub expiry_date: NaiveDate,
    pub supplier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumedLineSnapshot {
    pub item_name: String,
    pub unit: String,
    pub quantity_consumed: Decimal,
    pub cost_at_time_of_consumption: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionSnapshot {
    pub date: NaiveDate,
    pub class_or_student: String,
    pub number_of_students: u32,
    pub items: Vec<ConsumedLineSnapshot>,
    pub total_cost: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
