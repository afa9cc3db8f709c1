//! AI-assisted features. Ledger state is copied out before the model is called,
//! so a slow provider never holds the ledger lock.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use merenda_ai::{DemandAdjustment, GeneralChat, RecipeFlow, RecipeRequest, SpendingReport};
use merenda_infra::ai::snapshots::{consumption_snapshots, stock_snapshots};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/recipe-ideas", post(recipe_ideas))
        .route("/recipes", post(generate_recipe))
        .route("/reports/spending", post(spending_report))
        .route("/forecast", post(forecast))
}

pub async fn chat(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ChatRequest>,
) -> axum::response::Response {
    let runner = match services.ai() {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match runner.run(&GeneralChat::new(body.message, body.history)).await {
        Ok(reply) => (StatusCode::OK, Json(dto::ChatReply { reply })).into_response(),
        Err(e) => errors::ai_error_to_response(e),
    }
}

pub async fn recipe_ideas(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ChatRequest>,
) -> axum::response::Response {
    let runner = match services.ai() {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match runner
        .run(&GeneralChat::recipe_ideas(body.message, body.history))
        .await
    {
        Ok(reply) => (StatusCode::OK, Json(dto::ChatReply { reply })).into_response(),
        Err(e) => errors::ai_error_to_response(e),
    }
}

pub async fn generate_recipe(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<RecipeRequest>,
) -> axum::response::Response {
    let runner = match services.ai() {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match runner.run(&RecipeFlow::new(body)).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => errors::ai_error_to_response(e),
    }
}

pub async fn spending_report(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::PeriodParams>,
) -> axum::response::Response {
    let runner = match services.ai() {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let range = match body.range() {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let snapshot = services.ledger.snapshot().await;
    let flow = SpendingReport::new(
        consumption_snapshots(&snapshot.records),
        stock_snapshots(&snapshot.stock),
        range,
    );

    match runner.run(&flow).await {
        Ok(report) => (StatusCode::OK, Json(dto::ReportReply { report })).into_response(),
        Err(e) => errors::ai_error_to_response(e),
    }
}

pub async fn forecast(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let runner = match services.ai() {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let snapshot = services.ledger.snapshot().await;
    let flow = DemandAdjustment::new(
        consumption_snapshots(&snapshot.records),
        snapshot.student_count,
    );

    match runner.run(&flow).await {
        Ok(suggestion) => (StatusCode::OK, Json(dto::ForecastReply { suggestion })).into_response(),
        Err(e) => errors::ai_error_to_response(e),
    }
}
