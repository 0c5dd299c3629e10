//! Placeholder REST API client.
//!
//! Provides a typed client for the upstream collections the façade
//! aggregates, with response normalization into the types in [`types`].
//!
//! ### Specification
//!
//! - **Endpoints**: `/users`, `/posts`, `/photos` (GET, expect 200) and
//!   `/todos` (POST, expect 201).
//! - **Failures**: any other status becomes a tagged
//!   [`UpstreamError::UnexpectedStatus`] carrying the upstream status code.
//! - **No retries, no circuit breaking**; the only budget is the client-level
//!   request timeout.

pub mod error;
pub mod types;

pub use error::UpstreamError;
pub use types::{Address, Company, Geo, NewTodo, Photo, Post, Todo, User};

use async_trait::async_trait;
use reqwest::header;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Default base URL for the placeholder API.
const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "aggra/0.1";

/// The upstream collections this client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Posts,
    Photos,
    Todos,
}

impl Resource {
    /// Path segment under the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Posts => "posts",
            Resource::Photos => "photos",
            Resource::Todos => "todos",
        }
    }

    /// Message surfaced to callers when this endpoint answers badly.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Resource::Users => "Bad Request, API endpoint for users not success",
            Resource::Posts => "Bad Request, API endpoint for posts not success",
            Resource::Photos => "Bad Request: external images API",
            Resource::Todos => "Bad Request, todo save API endpoint",
        }
    }
}

/// Placeholder API client configuration.
#[derive(Debug, Clone)]
pub struct PlaceholderConfig {
    /// Base URL (default: <https://jsonplaceholder.typicode.com>).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: aggra/0.x).
    pub user_agent: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout: DEFAULT_TIMEOUT, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// Read/write access to the upstream collections.
///
/// The aggregation service is written against this trait so tests can swap in
/// an instrumented fake without touching the network.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// GET the full users collection.
    async fn users(&self) -> Result<Vec<User>, UpstreamError>;

    /// GET the full posts collection.
    async fn posts(&self) -> Result<Vec<Post>, UpstreamError>;

    /// GET the full photos collection.
    async fn photos(&self) -> Result<Vec<Photo>, UpstreamError>;

    /// POST a todo for creation; the response carries the assigned id.
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, UpstreamError>;
}

/// Placeholder API client.
#[derive(Debug, Clone)]
pub struct PlaceholderClient {
    http: reqwest::Client,
    config: PlaceholderConfig,
}

impl PlaceholderClient {
    /// Create a new client with the given configuration.
    pub fn new(mut config: PlaceholderConfig) -> Result<Self, UpstreamError> {
        Url::parse(&config.base_url).map_err(|e| UpstreamError::InvalidBaseUrl(e.to_string()))?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .gzip(true)
            .build()?;

        Ok(Self { http, config })
    }

    fn endpoint(&self, resource: Resource) -> String {
        format!("{}/{}", self.config.base_url, resource.path())
    }

    /// GET a whole collection, expecting HTTP 200.
    async fn get_collection<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, UpstreamError> {
        let url = self.endpoint(resource);
        tracing::debug!(%url, "fetching upstream collection");

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            tracing::warn!(%url, status, "upstream collection fetch failed");
            return Err(UpstreamError::UnexpectedStatus { resource, status });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}

#[async_trait]
impl UpstreamApi for PlaceholderClient {
    async fn users(&self) -> Result<Vec<User>, UpstreamError> {
        self.get_collection(Resource::Users).await
    }

    async fn posts(&self) -> Result<Vec<Post>, UpstreamError> {
        self.get_collection(Resource::Posts).await
    }

    async fn photos(&self) -> Result<Vec<Photo>, UpstreamError> {
        self.get_collection(Resource::Photos).await
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, UpstreamError> {
        let url = self.endpoint(Resource::Todos);
        tracing::debug!(%url, "creating todo upstream");

        let response = self
            .http
            .post(&url)
            .json(todo)
            .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 201 {
            tracing::warn!(%url, status, "upstream todo creation failed");
            return Err(UpstreamError::UnexpectedStatus { resource: Resource::Todos, status });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PlaceholderConfig::default();
        assert_eq!(config.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, "aggra/0.1");
    }

    #[test]
    fn test_client_new_rejects_bad_base_url() {
        let config = PlaceholderConfig { base_url: "not a url".into(), ..Default::default() };
        let result = PlaceholderClient::new(config);
        assert!(matches!(result, Err(UpstreamError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_endpoint_join_strips_trailing_slash() {
        let config = PlaceholderConfig { base_url: "https://example.com/".into(), ..Default::default() };
        let client = PlaceholderClient::new(config).unwrap();
        assert_eq!(client.endpoint(Resource::Users), "https://example.com/users");
        assert_eq!(client.endpoint(Resource::Photos), "https://example.com/photos");
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(Resource::Users.path(), "users");
        assert_eq!(Resource::Posts.path(), "posts");
        assert_eq!(Resource::Photos.path(), "photos");
        assert_eq!(Resource::Todos.path(), "todos");
    }
}
