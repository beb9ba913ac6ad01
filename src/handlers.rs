use crate::errors::AppError;
use crate::export::{validate_recipient, ExportSnapshot, REPORT_FILENAME};
use crate::models::{
    ChecklistView, EmailRequest, HistoryView, RelayRequest, ResetResponse, SendResponse,
    SendStatus, ToggleRequest,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Local;
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn get_checklist(
    State(state): State<AppState>,
) -> Result<Json<ChecklistView>, AppError> {
    let today = today_string();
    let mut session = state.session.lock().await;
    session.observe_day(&today).await?;
    Ok(Json(session.checklist_view(&today)))
}

pub async fn toggle_item(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ChecklistView>, AppError> {
    let id = payload.id.trim();
    if id.is_empty() {
        return Err(AppError::bad_request("id must not be empty"));
    }

    let mut session = state.session.lock().await;
    session.toggle(id).await?;
    Ok(Json(session.checklist_view(&today_string())))
}

pub async fn reset_day(State(state): State<AppState>) -> Result<Json<ResetResponse>, AppError> {
    let date = today_string();
    let mut session = state.session.lock().await;
    session.reset_day(&date).await?;

    Ok(Json(ResetResponse {
        checklist: session.checklist_view(&date),
        history: session.history_view(),
    }))
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryView> {
    let session = state.session.lock().await;
    Json(session.history_view())
}

pub async fn export_pdf(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let snapshot = take_snapshot(&state).await?;
    let document = snapshot.render(state.renderer.as_ref());

    Ok((
        [
            (header::CONTENT_TYPE, state.renderer.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        document,
    ))
}

pub async fn export_email(
    State(state): State<AppState>,
    Json(payload): Json<EmailRequest>,
) -> Result<Json<SendResponse>, AppError> {
    let email = validate_recipient(&payload.email)?;
    let snapshot = take_snapshot(&state).await?;
    let _sending = state.begin_send()?;

    let encoded = STANDARD.encode(snapshot.render(state.renderer.as_ref()));
    state.transmitter.transmit(&encoded, email).await?;

    info!("report with {} records sent to {email}", snapshot.history.len());
    Ok(Json(SendResponse {
        success: true,
        message: format!("Report sent to {email}"),
    }))
}

pub async fn export_status(State(state): State<AppState>) -> Json<SendStatus> {
    Json(SendStatus {
        sending: state.is_sending(),
    })
}

pub async fn relay_send_email(
    State(state): State<AppState>,
    Json(payload): Json<RelayRequest>,
) -> Result<Json<SendResponse>, AppError> {
    let response = state.relay.send(&payload.email, &payload.pdf_base64).await?;
    Ok(Json(response))
}

async fn take_snapshot(state: &AppState) -> Result<ExportSnapshot, AppError> {
    let session = state.session.lock().await;
    ExportSnapshot::new(
        &today_string(),
        session.checklist().items(),
        session.history().all(),
    )
}

/// Local calendar date as `dd.mm.yyyy`.
pub fn today_string() -> String {
    Local::now().date_naive().format("%d.%m.%Y").to_string()
}
