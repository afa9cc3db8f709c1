use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use merenda_core::{Entity, StockItemId};

/// Largest quantity or unit cost accepted from a form: one trillion.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// A tracked ingredient or supply.
///
/// Owned by the [`InventoryLedger`](crate::InventoryLedger); changed only through
/// ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: StockItemId,
    pub name: String,
    pub quantity: Decimal,
    /// Free-text unit label, e.g. "kg", "L", "un".
    pub unit: String,
    #[serde(with = "crate::date::flexible")]
    pub expiry_date: NaiveDate,
    pub supplier: String,
    /// Unit cost. Missing means "unknown" and counts as zero when consumed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
}

impl StockItem {
    pub fn unit_cost(&self) -> Decimal {
        self.cost.unwrap_or(Decimal::ZERO)
    }
}

impl Entity for StockItem {
    type Id = StockItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Field set for a stock item that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStockItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    #[serde(with = "crate::date::flexible")]
    pub expiry_date: NaiveDate,
    pub supplier: String,
    #[serde(default)]
    pub cost: Option<Decimal>,
}

impl NewStockItem {
    pub fn with_id(self, id: StockItemId) -> StockItem {
        StockItem {
            id,
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            expiry_date: self.expiry_date,
            supplier: self.supplier,
            cost: self.cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_amount_is_one_trillion() {
        assert_eq!(MAX_AMOUNT, Decimal::new(1_000_000_000_000, 0));
    }

    #[test]
    fn reads_browser_blob_layout() {
        let raw = r#"{
            "id": "0190f5c2-7b1e-7cc0-9d51-2b0c6a1f0a11",
            "name": "Arroz",
            "quantity": 12.5,
            "unit": "kg",
            "expiryDate": "2025-01-31T00:00:00.000Z",
            "supplier": "Cooperativa Sul"
        }"#;

        let item: StockItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.name, "Arroz");
        assert_eq!(item.quantity, Decimal::new(125, 1));
        assert_eq!(item.expiry_date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        assert_eq!(item.cost, None);
        assert_eq!(item.unit_cost(), Decimal::ZERO);
    }

    #[test]
    fn writes_camel_case_and_plain_date() {
        let item = NewStockItem {
            name: "Feijão".to_string(),
            quantity: Decimal::new(3, 0),
            unit: "kg".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            supplier: "Agro Vale".to_string(),
            cost: Some(Decimal::new(750, 2)),
        }
        .with_id(StockItemId::new());

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["expiryDate"], "2025-03-01");
        assert_eq!(json["cost"], 7.5);
        assert!(json.get("expiry_date").is_none());
    }
}
