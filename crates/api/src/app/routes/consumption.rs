use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(list_consumption).post(record_consumption))
}

/// Newest first, as the history table shows them.
pub async fn list_consumption(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let mut records = services.ledger.consumption_records().await;
    records.sort_by(|a, b| b.date.cmp(&a.date));
    Json(records).into_response()
}

pub async fn record_consumption(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ConsumptionRequest>,
) -> axum::response::Response {
    let consumption = match body.validate() {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match services.ledger.record_consumption(consumption).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}
