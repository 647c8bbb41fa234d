//! HTTP API handlers for foms-api

pub mod brochure;
pub mod error;
pub mod export;
pub mod health;
pub mod register;

pub use brochure::download_brochure;
pub use error::ApiError;
pub use export::export_submissions;
pub use health::health_routes;
pub use register::register;
