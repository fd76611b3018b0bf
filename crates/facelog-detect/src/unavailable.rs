//! Degraded-mode detector used when no model is configured or loading failed.

use crate::detector::{DetectError, FaceDetector};
use facelog_core::models::FaceBox;
use image::DynamicImage;

/// Fallback detector that always reports zero faces.
///
/// Uploads keep succeeding when the detection capability is absent; records
/// are still appended with `faces = 0`.
pub struct UnavailableDetector;

impl FaceDetector for UnavailableDetector {
    fn detect(&self, _image: &DynamicImage) -> Result<Vec<FaceBox>, DetectError> {
        tracing::warn!("Face detection unavailable, returning 0 faces");
        Ok(Vec::new())
    }

    fn available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_detector_returns_zero_faces() {
        let detector = UnavailableDetector;
        let image = DynamicImage::new_rgb8(10, 10);
        let boxes = detector.detect(&image).unwrap();
        assert!(boxes.is_empty());
        assert!(!detector.available());
    }
}
