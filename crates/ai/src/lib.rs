//! `merenda-ai`
//!
//! **Responsibility:** AI text-generation boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on the inventory ledger (inputs are plain snapshots).
//! - It must not mutate domain state.
//! - It renders prompts, hands them to a [`TextGenerator`], and parses the reply.

pub mod fake;
pub mod flow;
pub mod flows;
pub mod generator;
pub mod result;
pub mod runner;
pub mod snapshot;

pub use fake::ScriptedGenerator;
pub use flow::{AiFlow, FlowStep};
pub use flows::{
    ChatMessage, ChatRole, DemandAdjustment, GeneralChat, MealType, Recipe, RecipeFlow,
    RecipeIngredient, RecipeRequest, SpendingReport,
};
pub use generator::{GenerationRequest, TextGenerator, UnavailableGenerator};
pub use result::AiError;
pub use runner::FlowRunner;
pub use snapshot::{ConsumedLineSnapshot, ConsumptionSnapshot, StockSnapshot};
