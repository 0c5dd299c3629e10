//! Shared application state.

use std::sync::Arc;

use aggra_client::UpstreamApi;
use aggra_core::{AppConfig, TtlCache};

/// State handed to every handler: configuration, the process-wide cache, and
/// the upstream client behind its trait seam. Cloning is cheap; the cache
/// clone shares one store.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub cache: TtlCache,
    pub upstream: Arc<dyn UpstreamApi>,
}

impl AppState {
    /// Bundle a validated configuration with a fresh cache and the client.
    pub fn new(config: AppConfig, upstream: Arc<dyn UpstreamApi>) -> Self {
        Self { config: Arc::new(config), cache: TtlCache::new(), upstream }
    }
}
