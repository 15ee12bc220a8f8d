//! Search ranking and dealer diversification
//!
//! The pipeline that turns a ranked, filtered inventory pool into a page of
//! results: sort helpers for the supported sort modes, and the round-robin
//! dealer diversifier that keeps one dealership from dominating a page.

mod diversifier;
mod sort;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use diversifier::{diversify_by_dealer, should_apply_diversification};
pub use sort::apply_sort;
pub use types::{FilterOptions, SearchFilters, SortMode, Vehicle};
