//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::rate_limit::{PolicyPresets, RateLimiter};
use crate::storage::InventoryStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across worker threads.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Rate limiter client over the configured counter store
    pub limiter: Arc<RateLimiter>,
    /// Inventory store
    pub inventory: Arc<dyn InventoryStore>,
    /// Quota presets built once from configuration
    pub presets: PolicyPresets,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, limiter: RateLimiter, inventory: Arc<dyn InventoryStore>) -> Self {
        let presets = PolicyPresets::from_config(&config.rate_limit);
        Self {
            config: Arc::new(config),
            limiter: Arc::new(limiter),
            inventory,
            presets,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
