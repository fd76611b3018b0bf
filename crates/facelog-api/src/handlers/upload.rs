use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use facelog_core::models::UploadResponse;
use facelog_core::AppError;

use crate::error::HttpAppError;
use crate::state::AppState;

const IMAGE_FIELD: &str = "image";

/// Upload image handler
///
/// Pulls the `image` field out of the multipart body and delegates the rest
/// (validation, storage, detection, annotation, logging) to the upload
/// pipeline.
///
/// # Errors
/// - 400 when the `image` field is missing, the filename is empty, the
///   payload is empty, or the bytes don't decode as an image
/// - 500 for storage, detection, or log-store failures
#[tracing::instrument(skip(state, multipart), fields(operation = "upload"))]
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read upload: {}", e)))?;
        file = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::InvalidInput("No image file provided".to_string()))?;

    if filename.trim().is_empty() {
        return Err(AppError::InvalidInput("No selected file".to_string()).into());
    }
    if data.is_empty() {
        return Err(AppError::InvalidInput("File is empty".to_string()).into());
    }

    let processed = state.pipeline.process(data, &filename).await?;

    Ok(Json(UploadResponse {
        success: true,
        result_image_url: processed.result_url,
        original_image_url: processed.original_url,
        faces_detected: processed.faces_detected,
        timestamp: processed.timestamp,
    }))
}
