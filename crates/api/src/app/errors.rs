use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use merenda_ai::AiError;
use merenda_core::DomainError;
use merenda_inventory::LedgerError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match &err {
        DomainError::Validation(_) | DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DomainError::InvariantViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
    };
    json_error(status, err.code(), err.to_string())
}

pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    match &err {
        LedgerError::InsufficientStock {
            item_id,
            item_name,
            requested,
            available,
        } => (
            StatusCode::CONFLICT,
            axum::Json(json!({
                "error": "insufficient_stock",
                "message": err.to_string(),
                "itemId": item_id,
                "itemName": item_name,
                "requested": requested,
                "available": available,
            })),
        )
            .into_response(),
        LedgerError::AmountOverflow { .. } => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "amount_out_of_range",
            err.to_string(),
        ),
        LedgerError::NotFound(id) => domain_error_to_response(LedgerError::NotFound(*id).into()),
    }
}

pub fn ai_error_to_response(err: AiError) -> axum::response::Response {
    match err {
        AiError::InvalidInput(msg) => json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_input", msg),
        AiError::Unavailable(msg) => json_error(StatusCode::SERVICE_UNAVAILABLE, "ai_unavailable", msg),
        AiError::Provider(msg) => json_error(StatusCode::BAD_GATEWAY, "ai_provider_error", msg),
        AiError::Parse(msg) => json_error(StatusCode::BAD_GATEWAY, "ai_reply_unusable", msg),
    }
}

pub fn validation_error(problems: Vec<String>) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": problems.join("; "),
            "details": problems,
        })),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
