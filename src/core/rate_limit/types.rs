//! Rate limiter types and data structures

use crate::config::models::rate_limit::{PolicyConfig, RateLimitConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named quota rule: at most `limit` accepted operations per caller per
/// window of `window_seconds`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Endpoint name the counter is partitioned by
    pub endpoint: String,
    /// Maximum accepted operations per window
    pub limit: u32,
    /// Window length in seconds
    pub window_seconds: u64,
}

impl RateLimitPolicy {
    /// Create a new policy
    pub fn new<S: Into<String>>(endpoint: S, limit: u32, window_seconds: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            limit,
            window_seconds,
        }
    }

    /// Build a policy from its configuration entry
    pub fn from_config<S: Into<String>>(endpoint: S, config: &PolicyConfig) -> Self {
        Self::new(endpoint, config.limit, config.window_seconds)
    }
}

/// The named policies composed by API routes, built once at startup
#[derive(Debug, Clone)]
pub struct PolicyPresets {
    /// Per-minute search quota
    pub search: RateLimitPolicy,
    /// Per-minute filter-options quota
    pub filter_options: RateLimitPolicy,
    /// Burst guard
    pub burst: RateLimitPolicy,
    /// Per-hour session quota
    pub session: RateLimitPolicy,
}

impl PolicyPresets {
    /// Build the preset table from configuration
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self {
            search: RateLimitPolicy::from_config("search", &config.policies.search),
            filter_options: RateLimitPolicy::from_config(
                "filter_options",
                &config.policies.filter_options,
            ),
            burst: RateLimitPolicy::from_config("burst", &config.policies.burst),
            session: RateLimitPolicy::from_config("session", &config.policies.session),
        }
    }
}

impl Default for PolicyPresets {
    fn default() -> Self {
        Self::from_config(&RateLimitConfig::default())
    }
}

/// Raw result of one counter-store check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterCheck {
    /// Whether the operation fits within the window quota
    pub allowed: bool,
    /// Current accepted count within the window, including this operation
    pub current_count: u32,
    /// The limit the store enforced
    pub limit_value: u32,
    /// When the current window resets
    pub window_reset: DateTime<Utc>,
}

/// Decision produced per rate-limit check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitResult {
    /// Whether the caller may proceed
    pub allowed: bool,
    /// The quota the decision reports
    pub limit: u32,
    /// Remaining operations in the window, never negative
    pub remaining: u32,
    /// Window reset as epoch milliseconds
    pub reset_ms: i64,
    /// Endpoint name of the policy that denied, when not allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_check: Option<String>,
}
