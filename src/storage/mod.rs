//! Storage layer for the Carzo backend
//!
//! Counter-store backends for the rate limiter and the inventory seam the
//! production SQL layer plugs into.

pub mod counters;
pub mod inventory;

pub use counters::{MemoryCounterStore, RpcCounterStore};
pub use inventory::{InventoryStore, MemoryInventory};

use crate::config::models::storage::{CounterBackend, StorageConfig};
use crate::core::rate_limit::CounterStore;
use std::sync::Arc;
use tracing::info;

/// Build the configured counter-store backend
pub fn build_counter_store(config: &StorageConfig) -> Arc<dyn CounterStore> {
    match config.counters.backend {
        CounterBackend::Memory => {
            info!("Using in-process counter store");
            Arc::new(MemoryCounterStore::new())
        }
        CounterBackend::Rpc => {
            info!(url = %config.counters.rpc_url, "Using RPC counter store");
            Arc::new(RpcCounterStore::from_config(&config.counters))
        }
    }
}
