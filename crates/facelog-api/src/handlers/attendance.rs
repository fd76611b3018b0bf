use std::sync::Arc;

use axum::{extract::State, Json};
use facelog_core::models::AttendanceEntryResponse;

use crate::error::HttpAppError;
use crate::state::AppState;

/// List all attendance records, newest first.
#[tracing::instrument(skip(state))]
pub async fn list_attendance(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AttendanceEntryResponse>>, HttpAppError> {
    let records = state.attendance.list_all().await?;

    let entries = records
        .into_iter()
        .map(|record| {
            let image_url = state.storage.url_for(&record.image_path);
            AttendanceEntryResponse {
                timestamp: record.timestamp,
                faces: record.faces,
                image_path: record.image_path,
                image_url,
            }
        })
        .collect();

    Ok(Json(entries))
}
