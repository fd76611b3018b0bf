//! Face detector backed by the `rustface` crate (SeetaFace engine).

use crate::detector::{DetectError, FaceDetector};
use facelog_core::models::FaceBox;
use image::DynamicImage;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// SeetaFace frontal-face detector.
///
/// The model is loaded once at construction; `rustface::Detector` itself is
/// not `Sync`, so a detector instance is built from the cloned model per call.
pub struct SeetaFaceDetector {
    model: rustface::Model,
}

impl SeetaFaceDetector {
    /// Load the SeetaFace model from `path`.
    pub fn from_model_file(path: impl AsRef<Path>) -> Result<Self, DetectError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DetectError::ModelLoad(format!("{}: {}", path.display(), e)))?;
        let model = rustface::read_model(BufReader::new(file))
            .map_err(|e| DetectError::ModelLoad(format!("{}: {}", path.display(), e)))?;
        Ok(Self { model })
    }
}

impl FaceDetector for SeetaFaceDetector {
    fn detect(&self, image: &DynamicImage) -> Result<Vec<FaceBox>, DetectError> {
        let gray = image.to_luma8();
        let (width, height) = (gray.width(), gray.height());

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(20);
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray.as_raw(), width, height));

        let boxes = faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceBox::new(bbox.x(), bbox.y(), bbox.width(), bbox.height())
            })
            .collect();

        Ok(boxes)
    }
}
