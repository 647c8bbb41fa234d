//! # FOMS Common Library
//!
//! Shared code for the FOMS event-registration backend including:
//! - Registration record model and boundary validation
//! - Submission store (durable JSON document keyed by phone number)
//! - Spreadsheet export
//! - Error taxonomy

pub mod error;
pub mod export;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use model::{RegistrationForm, RegistrationRecord};
pub use store::SubmissionStore;
