//! In-memory TTL cache for upstream results.
//!
//! A process-wide mapping from string key to JSON value with per-entry
//! time-to-live. It supports:
//!
//! - Lazy expiry: freshness is checked at read time, no background sweeps
//! - Entries without a TTL that live for the process lifetime
//! - Cheap handle cloning; clones share one store

pub mod keys;
pub mod store;

pub use store::TtlCache;
