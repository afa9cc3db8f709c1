//! Deterministic spend figures over committed consumption records.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use merenda_core::{DateRange, StockItemId};

use crate::consumption::ConsumptionRecord;

/// Records dated inside `range`, in ledger order.
pub fn records_in<'a>(records: &'a [ConsumptionRecord], range: &DateRange) -> Vec<&'a ConsumptionRecord> {
    records.iter().filter(|r| range.contains(r.date)).collect()
}

/// Aggregated consumption of one stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSpend {
    pub item_id: StockItemId,
    pub item_name: String,
    pub unit: String,
    pub quantity: Decimal,
    pub total_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSummary {
    pub range: DateRange,
    pub record_count: usize,
    pub total_spend: Decimal,
    pub average_cost_per_record: Option<Decimal>,
    pub students_served: u64,
    pub average_cost_per_student: Option<Decimal>,
    pub top_by_cost: Vec<ItemSpend>,
    pub top_by_quantity: Vec<ItemSpend>,
}

impl SpendingSummary {
    pub fn compute(records: &[ConsumptionRecord], range: DateRange, top_n: usize) -> Self {
        let selected = records_in(records, &range);

        let total_spend = selected
            .iter()
            .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.total_cost));
        let students_served: u64 = selected.iter().map(|r| u64::from(r.number_of_students)).sum();

        // Keyed by id; later records overwrite name/unit so the newest label wins.
        let mut per_item: BTreeMap<StockItemId, ItemSpend> = BTreeMap::new();
        for record in &selected {
            for line in &record.items {
                let entry = per_item.entry(line.item_id).or_insert_with(|| ItemSpend {
                    item_id: line.item_id,
                    item_name: String::new(),
                    unit: String::new(),
                    quantity: Decimal::ZERO,
                    total_cost: Decimal::ZERO,
                });
                entry.item_name.clone_from(&line.item_name);
                entry.unit.clone_from(&line.unit);
                entry.quantity = entry.quantity.saturating_add(line.quantity_consumed);
                entry.total_cost = entry.total_cost.saturating_add(line.line_cost());
            }
        }

        let items: Vec<ItemSpend> = per_item.into_values().collect();

        let mut top_by_cost = items.clone();
        top_by_cost.sort_by(|a, b| b.total_cost.cmp(&a.total_cost).then_with(|| a.item_name.cmp(&b.item_name)));
        top_by_cost.truncate(top_n);

        let mut top_by_quantity = items;
        top_by_quantity.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.item_name.cmp(&b.item_name)));
        top_by_quantity.truncate(top_n);

        let average = |divisor: u64| {
            (divisor > 0).then(|| (total_spend / Decimal::from(divisor)).round_dp(2))
        };

        Self {
            range,
            record_count: selected.len(),
            total_spend,
            average_cost_per_record: average(selected.len() as u64),
            students_served,
            average_cost_per_student: average(students_served),
            top_by_cost,
            top_by_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use merenda_core::ConsumptionRecordId;

    use crate::consumption::{ConsumptionItem, ConsumptionLine, NewConsumption};
    use crate::ledger::InventoryLedger;
    use crate::stock::NewStockItem;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn seeded() -> InventoryLedger {
        let mut ledger = InventoryLedger::new();
        let rice = ledger.add_stock_item(NewStockItem {
            name: "Arroz".to_string(),
            quantity: Decimal::new(100, 0),
            unit: "kg".to_string(),
            expiry_date: day(31),
            supplier: "Coop".to_string(),
            cost: Some(Decimal::new(5, 0)),
        });
        let fruit = ledger.add_stock_item(NewStockItem {
            name: "Banana".to_string(),
            quantity: Decimal::new(100, 0),
            unit: "un".to_string(),
            expiry_date: day(31),
            supplier: "Coop".to_string(),
            cost: Some(Decimal::new(50, 2)),
        });

        for (date, students, rice_qty, fruit_qty) in [(day(1), 20, 2, 20), (day(5), 30, 4, 30), (day(9), 10, 1, 0)] {
            let mut items = vec![ConsumptionLine {
                item_id: rice.id,
                item_name: String::new(),
                quantity_consumed: Decimal::new(rice_qty, 0),
            }];
            if fruit_qty > 0 {
                items.push(ConsumptionLine {
                    item_id: fruit.id,
                    item_name: String::new(),
                    quantity_consumed: Decimal::new(fruit_qty, 0),
                });
            }
            ledger
                .record_consumption(NewConsumption {
                    date,
                    class_or_student: "Turma".to_string(),
                    number_of_students: students,
                    items,
                    notes: None,
                })
                .unwrap();
        }
        ledger
    }

    #[test]
    fn selects_records_inside_the_period() {
        let ledger = seeded();
        let range = DateRange::new(Some(day(5)), Some(day(9)));

        let dates: Vec<NaiveDate> = records_in(ledger.consumption_records(), &range)
            .iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec![day(5), day(9)]);
    }

    #[test]
    fn summarises_whole_history() {
        let ledger = seeded();
        let summary = SpendingSummary::compute(ledger.consumption_records(), DateRange::all(), 5);

        // rice: 7 kg * 5 = 35; bananas: 50 * 0.50 = 25
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.total_spend, Decimal::new(60, 0));
        assert_eq!(summary.average_cost_per_record, Some(Decimal::new(20, 0)));
        assert_eq!(summary.students_served, 60);
        assert_eq!(summary.average_cost_per_student, Some(Decimal::new(1, 0)));
        assert_eq!(summary.top_by_cost[0].item_name, "Arroz");
        assert_eq!(summary.top_by_quantity[0].item_name, "Banana");
        assert_eq!(summary.top_by_quantity[0].quantity, Decimal::new(50, 0));
    }

    #[test]
    fn filters_by_period_and_truncates() {
        let ledger = seeded();
        let summary = SpendingSummary::compute(
            ledger.consumption_records(),
            DateRange::new(Some(day(5)), None),
            1,
        );

        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.total_spend, Decimal::new(40, 0));
        assert_eq!(summary.top_by_cost.len(), 1);
    }

    #[test]
    fn oversized_stored_records_saturate() {
        let huge = Decimal::from_scientific("5e28").unwrap();
        let item_id = StockItemId::new();
        let record = |d| ConsumptionRecord {
            id: ConsumptionRecordId::new(),
            date: day(d),
            class_or_student: "Turma".to_string(),
            number_of_students: 10,
            items: vec![ConsumptionItem {
                item_id,
                item_name: "Arroz".to_string(),
                quantity_consumed: huge,
                unit: "kg".to_string(),
                cost_at_time_of_consumption: Decimal::TWO,
            }],
            total_cost: huge,
            notes: None,
        };

        let summary = SpendingSummary::compute(&[record(1), record(2)], DateRange::all(), 5);
        assert_eq!(summary.total_spend, Decimal::MAX);
        assert_eq!(summary.top_by_quantity[0].quantity, Decimal::MAX);
        assert_eq!(summary.top_by_cost[0].total_cost, Decimal::MAX);
    }

    #[test]
    fn empty_period_has_no_averages() {
        let ledger = seeded();
        let summary = SpendingSummary::compute(
            ledger.consumption_records(),
            DateRange::new(Some(day(20)), Some(day(25))),
            5,
        );

        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.total_spend, Decimal::ZERO);
        assert_eq!(summary.average_cost_per_record, None);
        assert!(summary.top_by_cost.is_empty());
    }
}
