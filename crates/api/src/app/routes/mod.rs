use axum::{
    Router,
    routing::{get, post},
};

pub mod ai;
pub mod auth;
pub mod consumption;
pub mod dashboard;
pub mod reports;
pub mod settings;
pub mod stock;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/auth/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::get_dashboard))
        .route(
            "/settings/student-count",
            get(settings::get_student_count).put(settings::set_student_count),
        )
        .route("/reports/spending", get(reports::spending_summary))
        .nest("/stock", stock::router())
        .nest("/consumption", consumption::router())
        .nest("/ai", ai::router())
}
