//! Face detector trait

use facelog_core::models::FaceBox;
use image::DynamicImage;
use thiserror::Error;

/// Detection errors
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Failed to load detection model: {0}")]
    ModelLoad(String),

    #[error("Detection failed: {0}")]
    Inference(String),
}

/// Pluggable face detection backend.
///
/// Coordinates are in source-image pixel space with a top-left origin. An
/// empty result is valid (no faces found, or capability degraded); callers
/// must not distinguish the two in their data model. `available` exists so
/// the degraded case stays visible in logs.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in `image` and return their bounding boxes.
    fn detect(&self, image: &DynamicImage) -> Result<Vec<FaceBox>, DetectError>;

    /// Whether a real detection backend is present.
    fn available(&self) -> bool {
        true
    }
}
