//! Application setup and initialization
//!
//! All initialization logic lives here, extracted from main.rs for better
//! organization and testability.

pub mod database;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::Result;
use facelog_core::Config;
use facelog_db::AttendanceRepository;
use facelog_processing::UploadPipeline;
use facelog_storage::LocalImageStore;
use std::path::Path;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Setup database and schema
    let pool = database::setup_database(&config).await?;
    let attendance = AttendanceRepository::new(pool);
    attendance
        .ensure_schema()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create attendance schema: {}", e))?;

    // Artifact storage under the public static root
    let storage = Arc::new(
        LocalImageStore::new(
            Path::new(config.static_dir()),
            config.public_base_url().to_string(),
        )
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize storage: {}", e))?,
    );

    // Face detection capability (degrades to zero faces when no model)
    let detector = facelog_detect::create_detector(config.face_model_path());

    let pipeline = UploadPipeline::new(storage.clone(), detector, attendance.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        pipeline,
        attendance,
        storage,
    });

    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
