//! Domain models

mod attendance;
mod face;

pub use attendance::{AttendanceEntryResponse, AttendanceRecord, UploadResponse};
pub use face::FaceBox;
