//! Concrete flows used by the dashboard.

pub mod chat;
pub mod demand;
pub mod recipe;
pub mod spending_report;

pub use chat::{ChatMessage, ChatRole, GeneralChat};
pub use demand::DemandAdjustment;
pub use recipe::{MealType, Recipe, RecipeFlow, RecipeIngredient, RecipeRequest};
pub use spending_report::SpendingReport;

/// Reject an empty reply; otherwise return it trimmed.
pub(crate) fn non_empty_reply(text: String) -> Result<String, crate::AiError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(crate::AiError::Parse("model returned an empty reply".to_string()));
    }
    Ok(trimmed.to_string())
}
