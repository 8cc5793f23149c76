//! Full CSV export of the event log.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use pxstats_store::EventStore;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/export.csv", get(export_csv))
}

/// GET /api/export.csv — the whole store, one event per line.
async fn export_csv(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let engine = state.engine.read();
    let body = render_csv(engine.store());
    ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body)
}

/// Render the store as CSV, oldest first. Absent IV components and
/// sources become empty cells.
pub fn render_csv(store: &EventStore) -> String {
    let mut lines = Vec::with_capacity(store.len() + 1);
    lines.push("timestamp,type,name,iv0,iv1,iv2,shiny,source".to_string());

    for event in store.iter() {
        let (iv0, iv1, iv2) = match event.iv {
            Some(iv) => (iv.0.to_string(), iv.1.to_string(), iv.2.to_string()),
            None => (String::new(), String::new(), String::new()),
        };
        let source = event.source.map(|s| s.to_string()).unwrap_or_default();
        lines.push(format!(
            "{},{},{},{},{},{},{},{}",
            event.timestamp.to_rfc3339(),
            event.kind,
            event.name,
            iv0,
            iv1,
            iv2,
            u8::from(event.shiny),
            source,
        ));
    }

    lines.join("\n")
}
