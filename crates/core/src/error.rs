//! Unified error types for aggra.
//!
//! Every service operation returns one of these instead of panicking or
//! bubbling a raw transport error. Each variant knows the HTTP status it maps
//! to, so the routing layer only has to pick a response body shape.

/// Unified error type for the aggregation service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input validation failed; `info` carries the joined field messages.
    #[error("Bad request : Validation Failed")]
    Validation {
        /// Comma-joined field-level violation messages.
        info: String,
    },

    /// The upstream API answered with an unexpected status.
    #[error("{message}")]
    Upstream {
        /// Descriptive message naming the failing endpoint.
        message: String,
        /// The upstream status code, propagated to the caller.
        status: u16,
    },

    /// Data-integrity conflict in the upstream source (duplicate id).
    #[error("{0}")]
    Conflict(String),

    /// The requested entity does not exist upstream.
    #[error("{0}")]
    NotFound(String),

    /// Transport failure or other unexpected error.
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation { .. } => 400,
            Error::Upstream { status, .. } => *status,
            Error::Conflict(_) => 409,
            Error::NotFound(_) => 404,
            Error::Internal(_) => 500,
        }
    }
}
