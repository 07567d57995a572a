use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/config", get(handlers::get_config))
        .route("/api/view", get(handlers::get_view))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/toggle", post(handlers::toggle))
        .route("/api/navigate", post(handlers::navigate))
        .route("/api/view-mode", post(handlers::set_view_mode))
        .route("/api/reference-date", post(handlers::set_reference_date))
        .route(
            "/api/completions",
            get(handlers::export_completions).put(handlers::restore_completions),
        )
        .with_state(state)
}
