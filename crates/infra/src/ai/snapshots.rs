//! Ledger models → AI flow inputs.

use merenda_ai::{ConsumedLineSnapshot, ConsumptionSnapshot, StockSnapshot};
use merenda_inventory::{ConsumptionRecord, StockItem};

pub fn stock_snapshot(item: &StockItem) -> StockSnapshot {
    StockSnapshot {
        name: item.name.clone(),
        quantity: item.quantity,
        unit: item.unit.clone(),
        expiry_date: item.expiry_date,
        supplier: item.supplier.clone(),
        cost: item.cost,
    }
}

pub fn consumption_snapshot(record: &ConsumptionRecord) -> ConsumptionSnapshot {
    ConsumptionSnapshot {
        date: record.date,
        class_or_student: record.class_or_student.clone(),
        number_of_students: record.number_of_students,
        items: record
            .items
            .iter()
            .map(|line| ConsumedLineSnapshot {
                item_name: line.item_name.clone(),
                unit: line.unit.clone(),
                quantity_consumed: line.quantity_consumed,
                cost_at_time_of_consumption: line.cost_at_time_of_consumption,
            })
            .collect(),
        total_cost: record.total_cost,
        notes: record.notes.clone(),
    }
}

pub fn stock_snapshots(items: &[StockItem]) -> Vec<StockSnapshot> {
    items.iter().map(stock_snapshot).collect()
}

pub fn consumption_snapshots(records: &[ConsumptionRecord]) -> Vec<ConsumptionSnapshot> {
    records.iter().map(consumption_snapshot).collect()
}
