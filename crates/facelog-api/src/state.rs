//! Application state shared across handlers.

use facelog_core::Config;
use facelog_db::AttendanceRepository;
use facelog_processing::UploadPipeline;
use facelog_storage::ImageStore;
use std::sync::Arc;

/// Everything a request handler needs: configuration, the upload pipeline,
/// the attendance log, and the artifact store (for URL resolution).
pub struct AppState {
    pub config: Config,
    pub pipeline: UploadPipeline,
    pub attendance: AttendanceRepository,
    pub storage: Arc<dyn ImageStore>,
}
