//! Configuration management for the Carzo backend
//!
//! This module handles loading, validation, and management of service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{CarzoError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the Carzo backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Search pipeline configuration
    #[serde(default)]
    pub search: SearchConfig,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CarzoError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| CarzoError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Only the deploy-sensitive knobs come from the environment; quota
    /// policies and search tuning keep their defaults unless a file sets them.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Config::default();

        if let Ok(host) = std::env::var("CARZO_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("CARZO_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| CarzoError::Config(format!("Invalid CARZO_PORT: {}", port)))?;
        }
        if let Ok(url) = std::env::var("CARZO_COUNTER_RPC_URL") {
            config.storage.counters.backend = CounterBackend::Rpc;
            config.storage.counters.rpc_url = url;
        }
        if let Ok(key) = std::env::var("CARZO_COUNTER_RPC_KEY") {
            config.storage.counters.rpc_key = key;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| CarzoError::Config(format!("Server config error: {}", e)))?;

        self.search
            .validate()
            .map_err(|e| CarzoError::Config(format!("Search config error: {}", e)))?;

        self.rate_limit
            .validate()
            .map_err(|e| CarzoError::Config(format!("Rate limit config error: {}", e)))?;

        self.storage
            .validate()
            .map_err(|e| CarzoError::Config(format!("Storage config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.search = self.search.merge(other.search);
        self.rate_limit = self.rate_limit.merge(other.rate_limit);
        self.storage = self.storage.merge(other.storage);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CarzoError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
server:
  host: "127.0.0.1"
  port: 8080

search:
  page_size: 20

rate_limit:
  policies:
    search:
      limit: 60
      window_seconds: 60

storage:
  counters:
    backend: memory
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search.page_size, 20);
        assert_eq!(config.rate_limit.policies.search.limit, 60);
    }

    #[tokio::test]
    async fn test_config_from_file_rejects_bad_policy() {
        let config_content = r#"
rate_limit:
  policies:
    burst:
      limit: 0
      window_seconds: 1
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        assert!(Config::from_file(temp_file.path()).await.is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert!(!yaml.is_empty());
    }

    #[test]
    fn test_config_merge() {
        let base = Config::default();
        let mut other = Config::default();
        other.server.port = 9090;
        other.search.page_size = 12;

        let merged = base.merge(other);
        assert_eq!(merged.server.port, 9090);
        assert_eq!(merged.search.page_size, 12);
    }
}
