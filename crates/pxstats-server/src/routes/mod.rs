//! HTTP route handlers.

pub mod export;
pub mod notices;
pub mod stats;
pub mod summary;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(notices::routes())
        .merge(summary::routes())
        .merge(export::routes())
        .merge(stats::routes())
}

/// Keep-alive probe for the hosting platform.
async fn healthz() -> &'static str {
    "OK"
}
