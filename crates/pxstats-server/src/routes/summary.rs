//! Summary routes — the windowed statistics view.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Duration, Utc};
use pxstats_aggregate::{Summary, SummaryView};
use pxstats_core::Event;
use serde::Deserialize;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/shinies", get(get_shinies))
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    pub hours: Option<i64>,
    pub view: Option<SummaryView>,
}

/// GET /api/summary?hours=24&view=catch-rate — the rolling-window stats.
async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>,
) -> Json<Summary> {
    let hours = params
        .hours
        .unwrap_or(state.config.summary_window_hours)
        .max(1);
    let view = params.view.unwrap_or_default();

    let engine = state.engine.read();
    Json(engine.summarize(Utc::now(), Duration::hours(hours), view))
}

/// GET /api/shinies — the 5 most recent shiny catches, any age.
async fn get_shinies(State(state): State<Arc<AppState>>) -> Json<Vec<Event>> {
    let engine = state.engine.read();
    Json(engine.recent_shinies(5))
}
