//! Rate limiter client
//!
//! Decides whether a caller may perform a named operation by consulting the
//! external counter store, and combines several named policies into a single
//! allow/deny decision. Counter-store failures never block traffic: every
//! error path converts to an allow with full quota (fail open).

use super::store::CounterStore;
use super::types::{RateLimitPolicy, RateLimitResult};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

/// Rate limiter client over an injected counter store
pub struct RateLimiter {
    /// Counter-store capability
    store: Arc<dyn CounterStore>,
    /// When disabled, every check allows with full quota and no store call
    enabled: bool,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self {
            store,
            enabled: true,
        }
    }

    /// Create a rate limiter with an explicit enabled flag
    pub fn with_enabled(store: Arc<dyn CounterStore>, enabled: bool) -> Self {
        Self { store, enabled }
    }

    /// Check a single policy for the given caller
    ///
    /// Delegates to the counter store; any store error fails open with the
    /// policy's full quota. `remaining` is clamped at zero.
    pub async fn check_one(&self, identifier: &str, policy: &RateLimitPolicy) -> RateLimitResult {
        if !self.enabled {
            return Self::fail_open(policy);
        }

        match self
            .store
            .check(
                identifier,
                &policy.endpoint,
                policy.limit,
                policy.window_seconds,
            )
            .await
        {
            Ok(check) => RateLimitResult {
                allowed: check.allowed,
                limit: policy.limit,
                remaining: policy.limit.saturating_sub(check.current_count),
                reset_ms: check.window_reset.timestamp_millis(),
                failed_check: None,
            },
            Err(e) => {
                warn!(
                    endpoint = %policy.endpoint,
                    error = %e,
                    "Counter store check failed, failing open"
                );
                Self::fail_open(policy)
            }
        }
    }

    /// Check several policies in order, short-circuiting on the first denial
    ///
    /// The combined decision is the logical AND of all policies. When every
    /// policy passes, the first policy's result is returned verbatim, so
    /// callers should order policies from coarse user-facing quotas to
    /// defensive fine-grained ones.
    pub async fn check_all(
        &self,
        identifier: &str,
        policies: &[RateLimitPolicy],
    ) -> RateLimitResult {
        let Some(first) = policies.first() else {
            return RateLimitResult {
                allowed: true,
                limit: 0,
                remaining: 0,
                reset_ms: Utc::now().timestamp_millis(),
                failed_check: None,
            };
        };

        let mut first_result = None;
        for (i, policy) in policies.iter().enumerate() {
            let result = self.check_one(identifier, policy).await;

            if !result.allowed {
                debug!(
                    endpoint = %policy.endpoint,
                    identifier = %identifier,
                    "Rate limit exceeded"
                );
                return RateLimitResult {
                    failed_check: Some(policy.endpoint.clone()),
                    ..result
                };
            }

            if i == 0 {
                first_result = Some(result);
            }
        }

        // All policies passed; the loop stored the first policy's result.
        first_result.unwrap_or_else(|| Self::fail_open(first))
    }

    /// Allow-with-full-quota result used on every failure path
    fn fail_open(policy: &RateLimitPolicy) -> RateLimitResult {
        RateLimitResult {
            allowed: true,
            limit: policy.limit,
            remaining: policy.limit,
            reset_ms: Utc::now().timestamp_millis() + (policy.window_seconds as i64) * 1000,
            failed_check: None,
        }
    }
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            enabled: self.enabled,
        }
    }
}
