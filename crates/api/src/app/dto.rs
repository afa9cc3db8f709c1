use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use merenda_ai::ChatMessage;
use merenda_core::StockItemId;
use merenda_inventory::date::parse_date;
use merenda_inventory::{ConsumptionLine, DateRange, MAX_AMOUNT, NewConsumption, NewStockItem};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItemRequest {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    #[serde(with = "merenda_inventory::date::flexible")]
    pub expiry_date: NaiveDate,
    pub supplier: String,
    #[serde(default)]
    pub cost: Option<Decimal>,
}

impl StockItemRequest {
    pub fn validate(self) -> Result<NewStockItem, axum::response::Response> {
        let mut problems = Vec::new();
        let name = self.name.trim().to_string();
        let unit = self.unit.trim().to_string();
        let supplier = self.supplier.trim().to_string();

        if name.chars().count() < 2 {
            problems.push("name must have at least 2 characters".to_string());
        }
        if self.quantity < Decimal::ZERO {
            problems.push("quantity must not be negative".to_string());
        } else if self.quantity > MAX_AMOUNT {
            problems.push(format!("quantity must not exceed {MAX_AMOUNT}"));
        }
        if unit.is_empty() {
            problems.push("unit is required".to_string());
        }
        if supplier.chars().count() < 2 {
            problems.push("supplier must have at least 2 characters".to_string());
        }
        match self.cost {
            Some(c) if c < Decimal::ZERO => problems.push("cost must not be negative".to_string()),
            Some(c) if c > MAX_AMOUNT => problems.push(format!("cost must not exceed {MAX_AMOUNT}")),
            _ => {}
        }

        if !problems.is_empty() {
            return Err(errors::validation_error(problems));
        }

        Ok(NewStockItem {
            name,
            quantity: self.quantity,
            unit,
            expiry_date: self.expiry_date,
            supplier,
            cost: self.cost,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionLineRequest {
    pub item_id: StockItemId,
    #[serde(default)]
    pub item_name: String,
    pub quantity_consumed: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionRequest {
    #[serde(with = "merenda_inventory::date::flexible")]
    pub date: NaiveDate,
    pub class_or_student: String,
    pub number_of_students: u32,
    pub items: Vec<ConsumptionLineRequest>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ConsumptionRequest {
    pub fn validate(self) -> Result<NewConsumption, axum::response::Response> {
        let mut problems = Vec::new();
        let class_or_student = self.class_or_student.trim().to_string();

        if class_or_student.chars().count() < 2 {
            problems.push("classOrStudent must have at least 2 characters".to_string());
        }
        if self.number_of_students < 1 {
            problems.push("numberOfStudents must be at least 1".to_string());
        }
        if self.items.is_empty() {
            problems.push("at least one item is required".to_string());
        }
        for (index, line) in self.items.iter().enumerate() {
            if line.quantity_consumed <= Decimal::ZERO {
                problems.push(format!("items[{index}].quantityConsumed must be positive"));
            } else if line.quantity_consumed > MAX_AMOUNT {
                problems.push(format!(
                    "items[{index}].quantityConsumed must not exceed {MAX_AMOUNT}"
                ));
            }
        }

        if !problems.is_empty() {
            return Err(errors::validation_error(problems));
        }

        Ok(NewConsumption {
            date: self.date,
            class_or_student,
            number_of_students: self.number_of_students,
            items: self
                .items
                .into_iter()
                .map(|line| ConsumptionLine {
                    item_id: line.item_id,
                    item_name: line.item_name,
                    quantity_consumed: line.quantity_consumed,
                })
                .collect(),
            notes: self
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCount {
    pub student_count: u32,
}

impl StudentCount {
    pub fn validate(self) -> Result<u32, axum::response::Response> {
        if self.student_count < 1 {
            return Err(errors::validation_error(vec![
                "studentCount must be at least 1".to_string(),
            ]));
        }
        Ok(self.student_count)
    }
}

/// Optional `start`/`end` dates, from a query string or a JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodParams {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    /// How many items each top list holds (reports only).
    #[serde(default)]
    pub top: Option<usize>,
}

impl PeriodParams {
    pub fn range(&self) -> Result<DateRange, axum::response::Response> {
        Ok(DateRange::new(
            parse_optional_date("start", self.start.as_deref())?,
            parse_optional_date("end", self.end.as_deref())?,
        ))
    }
}

fn parse_optional_date(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, axum::response::Response> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse_date(s).map(Some).ok_or_else(|| {
            errors::json_error(
                axum::http::StatusCode::BAD_REQUEST,
                "invalid_date",
                format!("{field}: expected YYYY-MM-DD, got {s}"),
            )
        }),
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ReportReply {
    pub report: String,
}

#[derive(Debug, Serialize)]
pub struct ForecastReply {
    pub suggestion: String,
}
