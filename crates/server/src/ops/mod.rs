//! Aggregation operations, one module per route.
//!
//! Every operation follows the same read-through shape: check the cache for
//! a fresh value, otherwise fetch from upstream, shape the result, store it,
//! return it. The cache holds raw JSON values; the typed result is
//! deserialized on a hit and treated as a miss if it no longer decodes.

pub mod company_posts;
pub mod images;
pub mod sorted_users;
pub mod todos;
pub mod user_posts;

use aggra_client::UpstreamError;
use aggra_core::{Error, TtlCache};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Fresh cached value under `key`, decoded; `None` on miss, expiry, or a
/// value that no longer decodes as `T`.
fn cached<T: DeserializeOwned>(cache: &TtlCache, key: &str) -> Option<T> {
    let value = cache.get(key)?;
    match serde_json::from_value(value) {
        Ok(decoded) => {
            tracing::debug!(key, "cache hit");
            Some(decoded)
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "cached value failed to decode; treating as miss");
            None
        }
    }
}

/// Store a result under `key` with the given TTL.
fn store<T: Serialize>(cache: &TtlCache, key: &str, value: &T, ttl: Duration) {
    match serde_json::to_value(value) {
        Ok(json) => {
            cache.set(key, json, Some(ttl));
            tracing::debug!(key, "cache filled");
        }
        Err(e) => tracing::warn!(key, error = %e, "failed to encode value for caching"),
    }
}

/// Lift a client failure into the service error space: unexpected statuses
/// propagate the upstream status, transport failures are internal errors.
fn map_upstream(err: UpstreamError) -> Error {
    match err {
        UpstreamError::UnexpectedStatus { resource, status } => {
            Error::Upstream { message: resource.failure_message().to_string(), status }
        }
        other => Error::Internal(other.to_string()),
    }
}
