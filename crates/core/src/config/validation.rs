//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use std::net::SocketAddr;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `bind_addr` is not a socket address
    /// - `upstream_base_url` is not an http(s) URL
    /// - `cache_ttl_secs` is 0 or exceeds one day
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `featured_user_id` is 0
    /// - `company_needle`, `user_agent`, or `allowed_origins` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid {
                field: "bind_addr".into(),
                reason: "must be a socket address such as 127.0.0.1:8040".into(),
            });
        }

        if !self.upstream_base_url.starts_with("http://") && !self.upstream_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                field: "upstream_base_url".into(),
                reason: "must be an http:// or https:// URL".into(),
            });
        }

        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid { field: "cache_ttl_secs".into(), reason: "must be greater than 0".into() });
        }
        if self.cache_ttl_secs > 86_400 {
            return Err(ConfigError::Invalid {
                field: "cache_ttl_secs".into(),
                reason: "must not exceed one day (86400s)".into(),
            });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.featured_user_id == 0 {
            return Err(ConfigError::Invalid {
                field: "featured_user_id".into(),
                reason: "must be a positive id".into(),
            });
        }

        if self.company_needle.is_empty() {
            return Err(ConfigError::Invalid { field: "company_needle".into(), reason: "must not be empty".into() });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.allowed_origins.is_empty() {
            return Err(ConfigError::Invalid {
                field: "allowed_origins".into(),
                reason: "must list at least one origin".into(),
            });
        }

        if self.excluded_domains.is_empty() {
            tracing::warn!("excluded_domains is empty; /sorted-users will not filter anyone out");
        }

        Ok(())
    }
}
