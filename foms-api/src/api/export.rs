//! Submission export endpoint

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use foms_common::{export, Error};
use tracing::info;

use crate::api::ApiError;
use crate::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// GET /api/download-excel
///
/// Snapshots the store and renders every submission into a single-sheet
/// workbook served as an attachment. An empty store short-circuits with
/// `NoData` before the formatter runs.
pub async fn export_submissions(State(state): State<AppState>) -> Result<Response, ApiError> {
    let records = state.store.snapshot().await?;
    if records.is_empty() {
        return Err(Error::NoData.into());
    }

    let buffer = export::render(&records)?;
    info!("Exported {} submissions", records.len());

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"submissions.xlsx\"",
            ),
        ],
        buffer,
    )
        .into_response())
}
