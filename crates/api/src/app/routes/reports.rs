use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    response::IntoResponse,
};

use crate::app::dto;
use crate::app::services::AppServices;

const DEFAULT_TOP_ITEMS: usize = 10;
const MAX_TOP_ITEMS: usize = 50;

pub async fn spending_summary(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::PeriodParams>,
) -> axum::response::Response {
    let range = match params.range() {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let top = params.top.unwrap_or(DEFAULT_TOP_ITEMS).min(MAX_TOP_ITEMS);

    Json(services.ledger.spending_summary(range, top).await).into_response()
}
