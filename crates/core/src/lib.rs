//! `merenda-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod period;

pub use aggregate::Aggregate;
pub use entity::{Entity, EntitySlice};
pub use error::{DomainError, DomainResult};
pub use id::{ConsumptionRecordId, SessionId, StockItemId};
pub use period::DateRange;
