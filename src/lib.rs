//! # Carzo
//!
//! Backend core for the Carzo vehicle marketplace: a dealer-diversified
//! search pipeline and a fail-open rate limiter over pluggable counter
//! stores, served through an Actix-web HTTP API.
//!
//! ## Features
//!
//! - **Dealer Diversification**: Round-robin interleaving so no single
//!   dealer dominates the first page of results
//! - **Sort-Aware Gating**: Diversification applies only to sort modes
//!   where it cannot break the user's requested ordering
//! - **Fail-Open Rate Limiting**: Quota checks degrade to allow when the
//!   counter store is unreachable
//! - **Pluggable Counters**: In-memory fixed windows or a remote RPC
//!   counter service behind one async trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use carzo::{Config, Service};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/carzo.yaml").await?;
//!     let service = Service::new(config).await?;
//!     service.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{CarzoError, Result};

// Export the search pipeline
pub use core::search::{
    apply_sort, diversify_by_dealer, should_apply_diversification, FilterOptions, SearchFilters,
    SortMode, Vehicle,
};

// Export rate limiting
pub use core::rate_limit::{
    CounterCheck, CounterStore, PolicyPresets, RateLimitPolicy, RateLimitResult, RateLimiter,
};

use tracing::info;

/// The Carzo backend service
pub struct Service {
    config: Config,
    server: server::HttpServer,
}

impl Service {
    /// Create a new service instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new service instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run the HTTP server
    pub async fn run(self) -> Result<()> {
        info!("Starting Carzo backend");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Service build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build information for the running binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
