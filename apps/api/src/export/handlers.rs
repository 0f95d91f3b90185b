//! Axum route handlers for the Export API.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::export::pptx::PPTX_MIME;
use crate::models::Slide;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub slides: Vec<Slide>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResponse {
    pub download_url: String,
    pub filename: String,
}

/// POST /export
///
/// Writes the deck to the export directory and returns where to fetch it.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    let exported = state.exports.save(request.slides).await?;
    debug!("Export ready at {}", exported.path.display());

    Ok(Json(ExportResponse {
        download_url: format!("/download/{}", exported.filename),
        filename: exported.filename,
    }))
}

/// GET /download/:filename
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let not_found = || AppError::NotFound(format!("File {filename} not found"));

    let path = state.exports.resolve(&filename).ok_or_else(not_found)?;
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
        Err(e) => {
            return Err(AppError::Internal(anyhow::anyhow!(
                "Failed to read {}: {e}",
                path.display()
            )))
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, PPTX_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}
