//! Counter-store capability
//!
//! Counting is delegated to an external atomic counter service; the limiter
//! only interprets its answers. The trait keeps the limiter testable with a
//! scripted mock and decouples it from the persistence technology.

use super::types::CounterCheck;
use crate::utils::error::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Atomic increment-and-check counter service
///
/// Implementations must treat each call as one attempted operation: increment
/// the (identifier, endpoint) counter for the current window and report
/// whether it fits under `limit`. Atomicity is the implementation's job.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Record one operation and report the window state
    async fn check(
        &self,
        identifier: &str,
        endpoint: &str,
        limit: u32,
        window_seconds: u64,
    ) -> Result<CounterCheck>;
}
