//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Cookie carrying the stable per-user identifier
    #[serde(default = "default_user_cookie")]
    pub user_cookie: String,
    /// Named quota policies applied by the API routes
    #[serde(default)]
    pub policies: PolicySet,
}

fn default_enabled() -> bool {
    true
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            user_cookie: default_user_cookie(),
            policies: PolicySet::default(),
        }
    }
}

impl RateLimitConfig {
    /// Merge rate limit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.user_cookie != default_user_cookie() {
            self.user_cookie = other.user_cookie;
        }
        self.policies = other.policies;
        self
    }

    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.user_cookie.is_empty() {
            return Err("User cookie name cannot be empty".to_string());
        }
        self.policies.validate()
    }
}

/// One named quota: at most `limit` requests per `window_seconds`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Maximum accepted operations per window
    pub limit: u32,
    /// Window length in seconds
    pub window_seconds: u64,
}

impl PolicyConfig {
    /// Validate a single policy
    pub fn validate(&self, name: &str) -> Result<(), String> {
        if self.limit == 0 {
            return Err(format!("Policy '{}' limit cannot be 0", name));
        }
        if self.window_seconds == 0 {
            return Err(format!("Policy '{}' window cannot be 0", name));
        }
        Ok(())
    }
}

/// The four quota presets composed by the API routes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolicySet {
    /// Per-minute search quota
    #[serde(default = "default_search_policy")]
    pub search: PolicyConfig,
    /// Per-minute filter-options quota
    #[serde(default = "default_filter_options_policy")]
    pub filter_options: PolicyConfig,
    /// Burst guard
    #[serde(default = "default_burst_policy")]
    pub burst: PolicyConfig,
    /// Per-hour session quota
    #[serde(default = "default_session_policy")]
    pub session: PolicyConfig,
}

fn default_search_policy() -> PolicyConfig {
    PolicyConfig {
        limit: 100,
        window_seconds: 60,
    }
}

fn default_filter_options_policy() -> PolicyConfig {
    PolicyConfig {
        limit: 50,
        window_seconds: 60,
    }
}

fn default_burst_policy() -> PolicyConfig {
    PolicyConfig {
        limit: 10,
        window_seconds: 1,
    }
}

fn default_session_policy() -> PolicyConfig {
    PolicyConfig {
        limit: 500,
        window_seconds: 3600,
    }
}

impl Default for PolicySet {
    fn default() -> Self {
        Self {
            search: default_search_policy(),
            filter_options: default_filter_options_policy(),
            burst: default_burst_policy(),
            session: default_session_policy(),
        }
    }
}

impl PolicySet {
    /// Validate all policies
    pub fn validate(&self) -> Result<(), String> {
        self.search.validate("search")?;
        self.filter_options.validate("filter_options")?;
        self.burst.validate("burst")?;
        self.session.validate("session")?;
        Ok(())
    }
}
