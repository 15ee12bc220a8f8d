//! Rate limiter client
//!
//! Fail-open quota enforcement for the API routes. Counting lives in an
//! external atomic counter store; this module decides, combines policies,
//! and derives the caller identity the counters are partitioned by.

mod identity;
mod limiter;
mod store;
mod types;


// Re-export public types
pub use identity::{anonymous_identifier, identify};
pub use limiter::RateLimiter;
pub use store::CounterStore;
pub use types::{CounterCheck, PolicyPresets, RateLimitPolicy, RateLimitResult};

#[cfg(test)]
pub use store::MockCounterStore;
