use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/checklist", get(handlers::get_checklist))
        .route("/api/checklist/toggle", post(handlers::toggle_item))
        .route("/api/checklist/reset", post(handlers::reset_day))
        .route("/api/history", get(handlers::get_history))
        .route("/api/export/pdf", get(handlers::export_pdf))
        .route("/api/export/email", post(handlers::export_email))
        .route("/api/export/status", get(handlers::export_status))
        .route("/api/relay/send-email", post(handlers::relay_send_email))
        .with_state(state)
}
