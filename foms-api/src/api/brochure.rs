//! Brochure download endpoint

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use foms_common::Error;
use tracing::error;

use crate::api::ApiError;
use crate::AppState;

/// GET /api/download
///
/// Returns the configured brochure file as an attachment. No caching and
/// no range support; the whole file is read per request.
pub async fn download_brochure(State(state): State<AppState>) -> Result<Response, ApiError> {
    let bytes = match tokio::fs::read(&state.brochure_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound("Brochure".to_string()).into());
        }
        Err(e) => {
            error!(
                "Error reading brochure {}: {}",
                state.brochure_path.display(),
                e
            );
            return Err(Error::Transfer(e.to_string()).into());
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"brochure.pdf\"",
            ),
        ],
        bytes,
    )
        .into_response())
}
