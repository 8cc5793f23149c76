//! Notice-source webhook — the ingestion seam for the chat-platform relay.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use pxstats_core::Notice;
use pxstats_runtime::IngestOutcome;
use serde::Deserialize;
use tracing::info;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/notices", post(post_notices))
}

/// One notice plus an optional occurrence timestamp. Absent timestamps
/// default to arrival time; explicit ones support historical backfill.
#[derive(Debug, Deserialize)]
pub struct NoticePayload {
    #[serde(flatten)]
    pub notice: Notice,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub notices: Vec<NoticePayload>,
}

/// POST /api/notices — classify and record a batch of notices.
async fn post_notices(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IngestRequest>,
) -> Json<serde_json::Value> {
    let mut recorded = 0usize;
    let mut suppressed = 0usize;
    let mut discarded = 0usize;

    let processed = req.notices.len();
    {
        let mut engine = state.engine.write();
        for payload in &req.notices {
            let ts = payload.timestamp.unwrap_or_else(Utc::now);
            match engine.ingest(&payload.notice, ts) {
                IngestOutcome::Recorded(_) => recorded += 1,
                IngestOutcome::Suppressed(_) => suppressed += 1,
                IngestOutcome::Discarded => discarded += 1,
            }
        }
    }

    if recorded > 0 {
        info!("Ingested {} notices ({} recorded)", processed, recorded);
    }

    Json(serde_json::json!({
        "processed": processed,
        "recorded": recorded,
        "suppressed": suppressed,
        "discarded": discarded,
    }))
}
