//! Storage configuration

use serde::{Deserialize, Serialize};

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Counter-store backend selection
    #[serde(default)]
    pub counters: CounterStoreConfig,
}

impl StorageConfig {
    /// Merge storage configurations
    pub fn merge(mut self, other: Self) -> Self {
        self.counters = self.counters.merge(other.counters);
        self
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), String> {
        self.counters.validate()
    }
}

/// Counter-store backend configuration
///
/// The hosted database exposes an atomic `check_rate_limit` stored procedure
/// over its REST RPC surface; `rpc` points the client at it. The `memory`
/// backend keeps fixed-window counters in-process for development and tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterStoreConfig {
    /// Backend kind
    #[serde(default)]
    pub backend: CounterBackend,
    /// Base URL of the hosted database REST surface
    #[serde(default)]
    pub rpc_url: String,
    /// Service key sent with RPC calls
    #[serde(default)]
    pub rpc_key: String,
}

impl Default for CounterStoreConfig {
    fn default() -> Self {
        Self {
            backend: CounterBackend::default(),
            rpc_url: String::new(),
            rpc_key: String::new(),
        }
    }
}

impl CounterStoreConfig {
    /// Merge counter-store configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.backend != CounterBackend::default() {
            self.backend = other.backend;
        }
        if !other.rpc_url.is_empty() {
            self.rpc_url = other.rpc_url;
        }
        if !other.rpc_key.is_empty() {
            self.rpc_key = other.rpc_key;
        }
        self
    }

    /// Validate counter-store configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.backend == CounterBackend::Rpc && self.rpc_url.is_empty() {
            return Err("RPC counter backend requires rpc_url".to_string());
        }
        Ok(())
    }
}

/// Counter-store backend kind
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CounterBackend {
    /// In-process fixed-window counters
    #[default]
    Memory,
    /// Hosted database stored procedure over REST RPC
    Rpc,
}
