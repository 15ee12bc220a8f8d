//! Search pipeline configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Search pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default number of results per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Maximum number of results per page
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
    /// Size of the ranked pool fetched from storage before pagination
    #[serde(default = "default_result_pool")]
    pub result_pool: u32,
    /// Enable dealer diversification on eligible sorts
    #[serde(default = "default_diversify")]
    pub diversify: bool,
}

fn default_diversify() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            result_pool: default_result_pool(),
            diversify: default_diversify(),
        }
    }
}

impl SearchConfig {
    /// Merge search configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.page_size != default_page_size() {
            self.page_size = other.page_size;
        }
        if other.max_page_size != default_max_page_size() {
            self.max_page_size = other.max_page_size;
        }
        if other.result_pool != default_result_pool() {
            self.result_pool = other.result_pool;
        }
        if !other.diversify {
            self.diversify = other.diversify;
        }
        self
    }

    /// Validate search configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("Page size cannot be 0".to_string());
        }
        if self.max_page_size < self.page_size {
            return Err("Max page size cannot be smaller than page size".to_string());
        }
        if self.result_pool < self.max_page_size {
            return Err("Result pool must cover at least one full page".to_string());
        }
        Ok(())
    }

    /// Clamp a requested page size to the configured bounds
    pub fn clamp_page_size(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.page_size)
            .clamp(1, self.max_page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();
        assert_eq!(config.page_size, 24);
        assert_eq!(config.max_page_size, 96);
        assert!(config.diversify);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_page_size() {
        let config = SearchConfig::default();
        assert_eq!(config.clamp_page_size(None), 24);
        assert_eq!(config.clamp_page_size(Some(0)), 1);
        assert_eq!(config.clamp_page_size(Some(48)), 48);
        assert_eq!(config.clamp_page_size(Some(10_000)), 96);
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let config = SearchConfig {
            page_size: 50,
            max_page_size: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
