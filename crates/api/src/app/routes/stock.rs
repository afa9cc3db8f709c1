use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use merenda_core::StockItemId;
use merenda_inventory::LedgerError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_stock_items).post(create_stock_item))
        .route(
            "/:id",
            get(get_stock_item)
                .put(update_stock_item)
                .delete(delete_stock_item),
        )
}

fn parse_id(id: &str) -> Result<StockItemId, axum::response::Response> {
    id.parse().map_err(errors::domain_error_to_response)
}

pub async fn list_stock_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    Json(services.ledger.stock_items().await).into_response()
}

pub async fn create_stock_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::StockItemRequest>,
) -> axum::response::Response {
    let item = match body.validate() {
        Ok(item) => item,
        Err(resp) => return resp,
    };

    let added = services.ledger.add_stock_item(item).await;
    (StatusCode::CREATED, Json(added)).into_response()
}

pub async fn get_stock_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.ledger.stock_item(id).await {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => errors::ledger_error_to_response(LedgerError::NotFound(id)),
    }
}

pub async fn update_stock_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::StockItemRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let item = match body.validate() {
        Ok(item) => item.with_id(id),
        Err(resp) => return resp,
    };

    match services.ledger.update_stock_item(item).await {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn delete_stock_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.ledger.delete_stock_item(id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}
