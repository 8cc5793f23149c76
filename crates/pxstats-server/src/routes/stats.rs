//! Store and ingestion statistics.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_stats))
}

/// GET /api/stats — retention and ingestion-debug counters.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let engine = state.engine.read();
    let store_stats = engine.store().stats();
    let counters = engine.counters();

    Json(serde_json::json!({
        "events": store_stats.total_events,
        "capacity": store_stats.capacity,
        "evicted": store_stats.evicted,
        "oldest": store_stats.oldest,
        "newest": store_stats.newest,
        "ingest": counters,
    }))
}
