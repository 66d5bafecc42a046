//! Crate error type.
//!
//! Only the explicit loading APIs are fallible. Runtime stepping never
//! returns errors: malformed targets coerce to 0, commands referencing
//! unknown entities are logged and dropped, and missing widgets no-op.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid manifest: {reason}")]
    Manifest { reason: String },
}

impl Error {
    pub fn manifest(reason: impl Into<String>) -> Self {
        Error::Manifest {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
