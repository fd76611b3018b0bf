//! Facelog API Library
//!
//! This crate provides the HTTP handlers, error mapping, and application
//! setup for the attendance service.

// Module declarations
mod handlers;
mod telemetry;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
pub use telemetry::init_tracing;
