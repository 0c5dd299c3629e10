//! The TTL store itself.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    stored_at: Instant,
    ttl: Option<Duration>,
}

impl Entry {
    /// An entry is fresh until strictly more than its TTL has elapsed.
    fn is_fresh(&self, now: Instant) -> bool {
        match self.ttl {
            None => true,
            Some(ttl) => now.duration_since(self.stored_at) <= ttl,
        }
    }
}

/// In-memory cache with per-entry TTL and lazy expiry.
///
/// The handle is cheap to clone; clones share the same store. All operations
/// take the inner lock exactly once, which keeps read-modify-write sequences
/// (notably [`TtlCache::push`]) atomic on a multi-threaded runtime.
#[derive(Debug, Clone, Default)]
pub struct TtlCache {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl TtlCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a fresh entry exists for `key`.
    pub fn has(&self, key: &str) -> bool {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).is_some_and(|e| e.is_fresh(Instant::now()))
    }

    /// Read a value; an entry past its TTL is evicted and reported absent.
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get(key) {
            Some(entry) if entry.is_fresh(Instant::now()) => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                tracing::debug!(key, "cache entry expired");
                None
            }
            None => None,
        }
    }

    /// Store a value. `ttl = None` means the entry never expires.
    pub fn set(&self, key: impl Into<String>, value: Value, ttl: Option<Duration>) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.into(), Entry { value, stored_at: Instant::now(), ttl });
    }

    /// Append `item` to the array stored under `key`, creating the array if
    /// absent. The list never expires. A non-array value under `key` is
    /// replaced by a fresh single-element array.
    pub fn push(&self, key: &str, item: Value) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get_mut(key).map(|e| &mut e.value) {
            Some(Value::Array(items)) => items.push(item),
            _ => {
                entries.insert(
                    key.to_string(),
                    Entry { value: Value::Array(vec![item]), stored_at: Instant::now(), ttl: None },
                );
            }
        }
    }
}
