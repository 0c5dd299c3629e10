//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (AGGRA_*)
//! 2. TOML config file (if AGGRA_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (AGGRA_*)
/// 2. TOML config file (if AGGRA_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP server listens on.
    ///
    /// Set via AGGRA_BIND_ADDR environment variable.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Base URL of the upstream placeholder API.
    ///
    /// Set via AGGRA_UPSTREAM_BASE_URL environment variable.
    #[serde(default = "default_upstream_base_url")]
    pub upstream_base_url: String,

    /// TTL in seconds for cached upstream queries.
    ///
    /// Set via AGGRA_CACHE_TTL_SECS environment variable.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Id of the user the `/Nicholas` aggregate is built around.
    ///
    /// Set via AGGRA_FEATURED_USER_ID environment variable.
    #[serde(default = "default_featured_user_id")]
    pub featured_user_id: u64,

    /// Company-name substring selecting users for `/Romaguera`.
    ///
    /// Set via AGGRA_COMPANY_NEEDLE environment variable.
    #[serde(default = "default_company_needle")]
    pub company_needle: String,

    /// Website domain suffixes excluded from `/sorted-users`.
    ///
    /// Set via AGGRA_EXCLUDED_DOMAINS environment variable (comma-separated).
    #[serde(default = "default_excluded_domains")]
    pub excluded_domains: Vec<String>,

    /// Origins allowed by the CORS policy.
    ///
    /// Set via AGGRA_ALLOWED_ORIGINS environment variable (comma-separated).
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// User-Agent string for upstream requests.
    ///
    /// Set via AGGRA_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upstream request timeout in milliseconds.
    ///
    /// Set via AGGRA_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8040".into()
}

fn default_upstream_base_url() -> String {
    "https://jsonplaceholder.typicode.com".into()
}

fn default_cache_ttl_secs() -> u64 {
    10
}

fn default_featured_user_id() -> u64 {
    8
}

fn default_company_needle() -> String {
    "Romaguera".into()
}

fn default_excluded_domains() -> Vec<String> {
    vec![".com".into(), ".net".into(), ".org".into()]
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost".into()]
}

fn default_user_agent() -> String {
    "aggra/0.1".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            upstream_base_url: default_upstream_base_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
            featured_user_id: default_featured_user_id(),
            company_needle: default_company_needle(),
            excluded_domains: default_excluded_domains(),
            allowed_origins: default_allowed_origins(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Cache TTL as Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `AGGRA_`
    /// 2. TOML file from `AGGRA_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("AGGRA_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("AGGRA_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:8040");
        assert_eq!(config.upstream_base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.cache_ttl_secs, 10);
        assert_eq!(config.featured_user_id, 8);
        assert_eq!(config.company_needle, "Romaguera");
        assert_eq!(config.excluded_domains, vec![".com", ".net", ".org"]);
        assert_eq!(config.allowed_origins, vec!["http://localhost"]);
        assert_eq!(config.user_agent, "aggra/0.1");
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn test_timeout_duration() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(10_000));
    }

    #[test]
    fn test_cache_ttl_duration() {
        let config = AppConfig::default();
        assert_eq!(config.cache_ttl(), Duration::from_secs(10));
    }
}
