//! Upstream client error types.

use std::sync::Arc;

use super::Resource;

/// Errors from the placeholder API client.
///
/// `UnexpectedStatus` carries a descriptive message plus the upstream status
/// code, so callers can propagate the status instead of panicking.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The configured base URL could not be parsed.
    #[error("invalid upstream base URL: {0}")]
    InvalidBaseUrl(String),

    /// The upstream answered with a status other than the expected one.
    #[error("{}", .resource.failure_message())]
    UnexpectedStatus {
        /// Which endpoint failed.
        resource: Resource,
        /// The status the upstream actually returned.
        status: u16,
    },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { UpstreamError::Timeout } else { UpstreamError::Network(Arc::new(err)) }
    }
}
