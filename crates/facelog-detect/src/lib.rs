//! Facelog Detect Library
//!
//! Face detection capability consumed by the upload pipeline. The pipeline
//! treats the detector as opaque: pixels in, bounding boxes out. Zero boxes is
//! a valid result, and a missing capability degrades to zero boxes rather than
//! failing uploads.

pub mod detector;
#[cfg(feature = "detector-seetaface")]
pub mod seetaface;
pub mod unavailable;

use std::sync::Arc;

pub use detector::{DetectError, FaceDetector};
#[cfg(feature = "detector-seetaface")]
pub use seetaface::SeetaFaceDetector;
pub use unavailable::UnavailableDetector;

/// Create the face detection capability from configuration.
///
/// Loads the SeetaFace model when a path is configured and the backend is
/// compiled in; any load failure falls back to the degraded detector so the
/// service still starts and uploads keep working with zero faces.
pub fn create_detector(model_path: Option<&str>) -> Arc<dyn FaceDetector> {
    #[cfg(feature = "detector-seetaface")]
    if let Some(path) = model_path {
        match SeetaFaceDetector::from_model_file(path) {
            Ok(detector) => {
                tracing::info!(model_path = %path, "SeetaFace detector initialized");
                return Arc::new(detector);
            }
            Err(e) => {
                tracing::error!(
                    model_path = %path,
                    error = %e,
                    "Failed to initialize SeetaFace detector; face detection disabled"
                );
                return Arc::new(UnavailableDetector);
            }
        }
    }

    #[cfg(not(feature = "detector-seetaface"))]
    let _ = model_path;

    tracing::warn!("No face detection model configured; face detection disabled");
    Arc::new(UnavailableDetector)
}
