//! Registration endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use foms_common::RegistrationForm;
use serde::Serialize;
use tracing::info;

use crate::api::ApiError;
use crate::AppState;

/// Successful registration response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub download_url: String,
}

/// POST /api/register
///
/// Validates the submitted form (all six fields required, all-or-nothing)
/// and stores it keyed by phone number. A phone number can only be
/// registered once; the first registration wins.
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<RegistrationForm>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let record = form.validate()?;
    let phone = record.phone.clone();

    state.store.insert(record).await?;
    info!("Registered submission for {}", phone);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
            download_url: "/api/download".to_string(),
        }),
    ))
}
