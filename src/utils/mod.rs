//! Utility modules for the Carzo backend
//!
//! Cross-cutting helpers shared by the core components and the HTTP layer.

pub mod error;

// Re-export commonly used types for convenience
pub use error::{CarzoError, Result};
