// HTTP request handlers
use crate::application::figure_board::SlotState;
use crate::domain::slot::ChartSlot;
use crate::infrastructure::event_stream::sse_from_board;
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page with the three chart regions
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(state.refresh_interval))
}

/// Latest state of every computed slot
pub async fn list_figures(State(state): State<Arc<AppState>>) -> Json<Vec<SlotState>> {
    Json(state.board.snapshot().await)
}

/// Latest state of one slot
pub async fn get_figure(
    Path(slot_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SlotState>, StatusCode> {
    let slot = ChartSlot::from_id(&slot_id).ok_or(StatusCode::NOT_FOUND)?;
    match state.board.get(slot).await {
        Some(slot_state) => Ok(Json(slot_state)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Push every slot update to the browser
pub async fn stream_figures(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::info!("Dashboard client connected");
    sse_from_board(state.board.clone())
}
