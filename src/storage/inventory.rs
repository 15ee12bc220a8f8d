//! Inventory store seam
//!
//! The production inventory lives in the hosted SQL database; this trait is
//! the seam it plugs into. The shipped `MemoryInventory` evaluates the same
//! filter semantics in-process for development and tests.

use crate::core::search::{FilterOptions, SearchFilters, Vehicle};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;
use tokio::sync::RwLock;

/// Ranked vehicle retrieval
///
/// `search` returns vehicles already ranked by relevance; callers apply sort
/// modes and diversification on top.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Fetch the ranked candidate pool matching the filters
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Vehicle>>;

    /// Distinct filter values available across the inventory
    async fn filter_options(&self) -> Result<FilterOptions>;
}

/// In-process inventory for development and tests
#[derive(Default)]
pub struct MemoryInventory {
    vehicles: RwLock<Vec<Vehicle>>,
}

impl MemoryInventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory seeded with listings
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: RwLock::new(vehicles),
        }
    }

    /// Add a listing
    pub async fn insert(&self, vehicle: Vehicle) {
        self.vehicles.write().await.push(vehicle);
    }

    /// Number of listings held
    pub async fn len(&self) -> usize {
        self.vehicles.read().await.len()
    }

    /// Whether the inventory is empty
    pub async fn is_empty(&self) -> bool {
        self.vehicles.read().await.is_empty()
    }
}

fn matches(vehicle: &Vehicle, filters: &SearchFilters) -> bool {
    if let Some(make) = &filters.make {
        if !vehicle.make.eq_ignore_ascii_case(make) {
            return false;
        }
    }
    if let Some(model) = &filters.model {
        if !vehicle.model.eq_ignore_ascii_case(model) {
            return false;
        }
    }
    if let Some(min) = filters.price_min {
        if vehicle.price.map_or(true, |p| p < min) {
            return false;
        }
    }
    if let Some(max) = filters.price_max {
        if vehicle.price.map_or(true, |p| p > max) {
            return false;
        }
    }
    if let Some(min) = filters.year_min {
        if vehicle.year < min {
            return false;
        }
    }
    if let Some(max) = filters.year_max {
        if vehicle.year > max {
            return false;
        }
    }
    if let Some(max) = filters.mileage_max {
        if vehicle.mileage.map_or(true, |m| m > max) {
            return false;
        }
    }
    if let Some(radius) = filters.max_distance_miles {
        if vehicle.distance_miles.map_or(true, |d| d > radius) {
            return false;
        }
    }
    true
}

#[async_trait]
impl InventoryStore for MemoryInventory {
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        let mut results: Vec<Vehicle> = vehicles
            .iter()
            .filter(|v| matches(v, filters))
            .cloned()
            .collect();

        if filters.limit > 0 {
            results.truncate(filters.limit);
        }
        Ok(results)
    }

    async fn filter_options(&self) -> Result<FilterOptions> {
        let vehicles = self.vehicles.read().await;

        let makes: BTreeSet<String> = vehicles.iter().map(|v| v.make.clone()).collect();
        let models: BTreeSet<String> = vehicles.iter().map(|v| v.model.clone()).collect();
        let years: BTreeSet<u16> = vehicles.iter().map(|v| v.year).collect();

        Ok(FilterOptions {
            makes: makes.into_iter().collect(),
            models: models.into_iter().collect(),
            years: years.into_iter().rev().collect(),
        })
    }
}
