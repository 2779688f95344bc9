//! # Vessel Store Shared
//!
//! Configuration and error types used by every binary in the workspace.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
