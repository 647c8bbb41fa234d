//! API error mapping
//!
//! Wraps [`foms_common::Error`] so handlers can use `?` and every failure
//! reaches the client as a distinguishing status plus a JSON body. None of
//! these conditions terminate the running process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use foms_common::Error;
use serde_json::json;
use tracing::error;

/// Handler-level error producing `{"error": <message>}` bodies
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::MissingFields => (StatusCode::BAD_REQUEST, self.0.to_string()),
            Error::DuplicateKey(_) => (StatusCode::CONFLICT, "Already registered".to_string()),
            Error::NoData => (StatusCode::NOT_FOUND, self.0.to_string()),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            Error::CorruptStore(_)
            | Error::Transfer(_)
            | Error::Export(_)
            | Error::Io(_)
            | Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Request failed: {}", self.0);
        }

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
