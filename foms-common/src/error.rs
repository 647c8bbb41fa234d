//! Common error types for FOMS

use thiserror::Error;

/// Common result type for FOMS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the registration data path
///
/// None of these conditions terminate the running process; every one is
/// surfaced to the calling request with a distinguishing status.
#[derive(Error, Debug)]
pub enum Error {
    /// Submission rejected because a required field is absent or blank
    #[error("All fields are required")]
    MissingFields,

    /// Phone number already registered (first write wins)
    #[error("Already registered: {0}")]
    DuplicateKey(String),

    /// Backing store document exists but cannot be parsed
    #[error("Corrupt submission store: {0}")]
    CorruptStore(String),

    /// Export requested while the store holds no submissions
    #[error("No submissions found")]
    NoData,

    /// Requested static resource absent
    #[error("{0} not found")]
    NotFound(String),

    /// I/O failure while producing a response body
    #[error("Transfer error: {0}")]
    Transfer(String),

    /// Spreadsheet serialization failure
    #[error("Export error: {0}")]
    Export(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
