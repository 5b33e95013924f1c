//! # launchsmith Utilities
//!
//! Shared utilities and logging for launchsmith.
//!
//! This crate provides common functionality used across the launchsmith
//! workspace, most importantly the `tracing` setup every binary shares.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{init_logging, init_logging_to_dir, init_logging_with_level, LogFormat, LogLevel, LoggingError};
pub use tracing::{debug, error, info, trace, warn};
