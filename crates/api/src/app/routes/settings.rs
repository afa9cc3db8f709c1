use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};

use crate::app::dto;
use crate::app::services::AppServices;

pub async fn get_student_count(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    Json(dto::StudentCount {
        student_count: services.ledger.student_count().await,
    })
    .into_response()
}

pub async fn set_student_count(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::StudentCount>,
) -> axum::response::Response {
    let count = match body.validate() {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    Json(dto::StudentCount {
        student_count: services.ledger.set_student_count(count).await,
    })
    .into_response()
}
