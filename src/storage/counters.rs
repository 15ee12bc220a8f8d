//! Counter-store implementations
//!
//! Two backends for the rate limiter's counter capability: the hosted
//! database's `check_rate_limit` stored procedure reached over its REST RPC
//! surface, and an in-process fixed-window map for development and tests.

use crate::config::models::storage::CounterStoreConfig;
use crate::core::rate_limit::{CounterCheck, CounterStore};
use crate::utils::error::{CarzoError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// In-process fixed-window counters
///
/// Counts per (identifier, endpoint) key under one lock. Windows are fixed:
/// the first operation opens the window and the count resets when it ends.
/// Only suitable for a single process; production uses the RPC backend.
#[derive(Default)]
pub struct MemoryCounterStore {
    entries: RwLock<HashMap<String, CounterEntry>>,
}

/// One window's state for a counter key
struct CounterEntry {
    count: u32,
    window_reset: DateTime<Utc>,
}

impl MemoryCounterStore {
    /// Create an empty counter store
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop entries whose window has ended
    pub async fn cleanup(&self) {
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.window_reset > now);
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn check(
        &self,
        identifier: &str,
        endpoint: &str,
        limit: u32,
        window_seconds: u64,
    ) -> Result<CounterCheck> {
        let key = format!("{}:{}", identifier, endpoint);
        let now = Utc::now();

        let mut entries = self.entries.write().await;
        let entry = entries.entry(key).or_insert_with(|| CounterEntry {
            count: 0,
            window_reset: now + Duration::seconds(window_seconds as i64),
        });

        if entry.window_reset <= now {
            entry.count = 0;
            entry.window_reset = now + Duration::seconds(window_seconds as i64);
        }

        entry.count += 1;

        Ok(CounterCheck {
            allowed: entry.count <= limit,
            current_count: entry.count,
            limit_value: limit,
            window_reset: entry.window_reset,
        })
    }
}

/// Counter store backed by the hosted database's `check_rate_limit` stored
/// procedure, called over the database's REST RPC endpoint
pub struct RpcCounterStore {
    client: reqwest::Client,
    rpc_url: String,
    rpc_key: String,
}

/// Row shape returned by `check_rate_limit`
#[derive(Debug, Deserialize)]
struct RpcCounterRow {
    allowed: bool,
    current_count: u32,
    limit_value: u32,
    window_reset: DateTime<Utc>,
}

impl RpcCounterStore {
    /// Create a store from counter configuration
    pub fn from_config(config: &CounterStoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            rpc_url: config.rpc_url.trim_end_matches('/').to_string(),
            rpc_key: config.rpc_key.clone(),
        }
    }
}

#[async_trait]
impl CounterStore for RpcCounterStore {
    async fn check(
        &self,
        identifier: &str,
        endpoint: &str,
        limit: u32,
        window_seconds: u64,
    ) -> Result<CounterCheck> {
        let url = format!("{}/rest/v1/rpc/check_rate_limit", self.rpc_url);

        debug!(endpoint = %endpoint, "Calling check_rate_limit RPC");

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.rpc_key)
            .bearer_auth(&self.rpc_key)
            .json(&serde_json::json!({
                "p_identifier": identifier,
                "p_endpoint": endpoint,
                "p_limit": limit,
                "p_window_seconds": window_seconds,
            }))
            .send()
            .await?
            .error_for_status()?;

        let rows: Vec<RpcCounterRow> = response.json().await?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| CarzoError::CounterStore("empty check_rate_limit payload".to_string()))?;

        Ok(CounterCheck {
            allowed: row.allowed,
            current_count: row.current_count,
            limit_value: row.limit_value,
            window_reset: row.window_reset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_allows_under_limit() {
        let store = MemoryCounterStore::new();

        for i in 1..=5 {
            let check = store.check("1.2.3.4", "search", 5, 60).await.unwrap();
            assert!(check.allowed, "operation {} should be allowed", i);
            assert_eq!(check.current_count, i);
        }
    }

    #[tokio::test]
    async fn test_memory_store_denies_over_limit() {
        let store = MemoryCounterStore::new();

        for _ in 0..3 {
            store.check("1.2.3.4", "burst", 3, 60).await.unwrap();
        }

        let check = store.check("1.2.3.4", "burst", 3, 60).await.unwrap();
        assert!(!check.allowed);
        assert_eq!(check.current_count, 4);
    }

    #[tokio::test]
    async fn test_memory_store_keys_are_independent() {
        let store = MemoryCounterStore::new();

        store.check("1.2.3.4", "search", 1, 60).await.unwrap();
        let denied = store.check("1.2.3.4", "search", 1, 60).await.unwrap();
        assert!(!denied.allowed);

        // Different identifier, same endpoint
        let other = store.check("5.6.7.8", "search", 1, 60).await.unwrap();
        assert!(other.allowed);

        // Same identifier, different endpoint
        let other = store.check("1.2.3.4", "filter_options", 1, 60).await.unwrap();
        assert!(other.allowed);
    }

    #[tokio::test]
    async fn test_memory_store_window_reset() {
        let store = MemoryCounterStore::new();

        // 0-second windows make the reset observable without sleeping long.
        store.check("1.2.3.4", "search", 1, 0).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        let check = store.check("1.2.3.4", "search", 1, 0).await.unwrap();
        assert!(check.allowed);
        assert_eq!(check.current_count, 1);
    }

    #[tokio::test]
    async fn test_memory_store_cleanup() {
        let store = MemoryCounterStore::new();

        store.check("1.2.3.4", "search", 5, 0).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        store.cleanup().await;

        assert!(store.entries.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_memory_store_reports_window_reset_in_future() {
        let store = MemoryCounterStore::new();

        let before = Utc::now();
        let check = store.check("1.2.3.4", "search", 5, 60).await.unwrap();
        assert!(check.window_reset >= before + Duration::seconds(59));
    }
}
