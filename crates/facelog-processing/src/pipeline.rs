//! Upload pipeline: validate → store original → decode → detect → annotate →
//! store result → log.
//!
//! Failure semantics: nothing is written before validation passes; once the
//! original artifact is on disk, any failure up to and including the annotated
//! save removes it again (best-effort), so failed uploads leave no orphans. A
//! log-append failure after both artifacts are stored keeps the images and
//! reports the error; that inconsistency is accepted rather than rolled back.

use std::sync::Arc;

use chrono::Local;
use facelog_core::AppError;
use facelog_db::AttendanceRepository;
use facelog_detect::FaceDetector;
use facelog_storage::{ArtifactKeys, ImageStore};

use crate::annotate::{decode_image, draw_face_boxes, encode_image};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct ProcessedUpload {
    pub original_key: String,
    pub original_url: String,
    pub result_key: String,
    pub result_url: String,
    pub faces_detected: usize,
    pub timestamp: String,
}

/// Orchestrator for one upload.
///
/// Collaborators are injected at construction so tests can substitute the
/// store, the detector, and the log independently.
#[derive(Clone)]
pub struct UploadPipeline {
    store: Arc<dyn ImageStore>,
    detector: Arc<dyn FaceDetector>,
    attendance: AttendanceRepository,
}

impl UploadPipeline {
    pub fn new(
        store: Arc<dyn ImageStore>,
        detector: Arc<dyn FaceDetector>,
        attendance: AttendanceRepository,
    ) -> Self {
        Self {
            store,
            detector,
            attendance,
        }
    }

    /// Process one uploaded image end to end.
    #[tracing::instrument(skip(self, data), fields(size_bytes = data.len()))]
    pub async fn process(
        &self,
        data: Vec<u8>,
        client_filename: &str,
    ) -> Result<ProcessedUpload, AppError> {
        if data.is_empty() {
            return Err(AppError::InvalidInput("File is empty".to_string()));
        }
        if client_filename.trim().is_empty() {
            return Err(AppError::InvalidInput("No selected file".to_string()));
        }

        let keys = ArtifactKeys::for_upload(client_filename);

        let original_url = self
            .store
            .save(&keys.original, data.clone())
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let (image, format) = match decode_image(&data) {
            Ok(decoded) => decoded,
            Err(e) => {
                self.remove_artifact(&keys.original).await;
                return Err(e);
            }
        };

        let boxes = match self.detector.detect(&image) {
            Ok(boxes) => boxes,
            Err(e) => {
                self.remove_artifact(&keys.original).await;
                return Err(AppError::Detection(e.to_string()));
            }
        };
        let faces_detected = boxes.len();

        // With zero boxes the annotated artifact is the original bytes,
        // untouched; re-encoding would change them for no visible difference.
        let annotated_bytes = if boxes.is_empty() {
            data
        } else {
            match encode_image(&draw_face_boxes(&image, &boxes), format) {
                Ok(bytes) => bytes,
                Err(e) => {
                    self.remove_artifact(&keys.original).await;
                    return Err(e);
                }
            }
        };

        let result_url = match self.store.save(&keys.annotated, annotated_bytes).await {
            Ok(url) => url,
            Err(e) => {
                self.remove_artifact(&keys.annotated).await;
                self.remove_artifact(&keys.original).await;
                return Err(AppError::Storage(e.to_string()));
            }
        };

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        if let Err(e) = self
            .attendance
            .append(&timestamp, faces_detected as i64, &keys.annotated)
            .await
        {
            // Both artifacts stay on disk without a record; accepted
            // inconsistency, surfaced to the operator.
            tracing::error!(
                error = %e,
                original_key = %keys.original,
                result_key = %keys.annotated,
                "Attendance append failed after images were stored; artifacts kept"
            );
            return Err(e);
        }

        tracing::info!(
            faces_detected,
            detector_available = self.detector.available(),
            original_key = %keys.original,
            result_key = %keys.annotated,
            "Upload processed"
        );

        Ok(ProcessedUpload {
            original_key: keys.original,
            original_url,
            result_key: keys.annotated,
            result_url,
            faces_detected,
            timestamp,
        })
    }

    /// Best-effort cleanup; deletion failures are logged, not propagated.
    async fn remove_artifact(&self, key: &str) {
        if let Err(e) = self.store.delete(key).await {
            tracing::warn!(error = %e, key = %key, "Failed to clean up artifact after pipeline error");
        }
    }
}
