//! foms-api library - HTTP surface of the FOMS registration backend
//!
//! Exposes the router builder so integration tests can drive the service
//! in-process.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use foms_common::SubmissionStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Durable submission store (file-backed, single-writer)
    pub store: Arc<SubmissionStore>,
    /// Location of the brochure served by the download route
    pub brochure_path: PathBuf,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<SubmissionStore>, brochure_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            brochure_path: brochure_path.into(),
        }
    }
}

/// Build application router
///
/// CORS is permissive for local/embedded form use, matching the deployed
/// front-end expectations.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/register", post(api::register))
        .route("/api/download", get(api::download_brochure))
        .route("/api/download-excel", get(api::export_submissions))
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
