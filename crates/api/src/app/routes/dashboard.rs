use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};
use chrono::Local;

use crate::app::services::AppServices;

pub async fn get_dashboard(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let today = Local::now().date_naive();
    Json(services.ledger.dashboard(today).await).into_response()
}
