//! Facelog Core Library
//!
//! Domain models, configuration, and the unified error type shared by all
//! facelog crates.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
