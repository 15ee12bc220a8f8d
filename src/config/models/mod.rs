//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

pub mod rate_limit;
pub mod search;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use rate_limit::*;
pub use search::*;
pub use server::*;
pub use storage::*;

/// Default server host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default search page size
pub fn default_page_size() -> u32 {
    24
}

/// Default maximum search page size
pub fn default_max_page_size() -> u32 {
    96
}

/// Default result pool fetched before pagination
pub fn default_result_pool() -> u32 {
    500
}

/// Default identity cookie name
pub fn default_user_cookie() -> String {
    "carzo_user_id".to_string()
}
