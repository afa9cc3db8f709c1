use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use tracing::{info, warn};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match services.sessions.login(&body.username, &body.password) {
        Some(session) => {
            info!(username = session.username(), "login");
            (
                StatusCode::OK,
                Json(dto::LoginResponse {
                    token: session.session_id().to_string(),
                    username: session.username().to_string(),
                }),
            )
                .into_response()
        }
        None => {
            warn!("login rejected");
            errors::json_error(
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "invalid username or password",
            )
        }
    }
}

pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> StatusCode {
    services.sessions.logout(session.session_id());
    info!(username = session.username(), "logout");
    StatusCode::NO_CONTENT
}
