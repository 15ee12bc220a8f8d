//! Core business logic
//!
//! The two request-scoped components behind the API routes: the search
//! ranking/diversification pipeline and the fail-open rate limiter client.

pub mod rate_limit;
pub mod search;
