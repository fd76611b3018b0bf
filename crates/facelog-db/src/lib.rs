//! Facelog DB Library
//!
//! SQLite persistence for the attendance log.

pub mod attendance;

pub use attendance::AttendanceRepository;
