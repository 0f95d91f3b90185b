//! Axum route handler for the Patch API.

use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::models::{Slide, SlidesState};
use crate::patch::interpreter::apply_patch;

#[derive(Debug, Deserialize)]
pub struct PatchRequest {
    pub slides: Vec<Slide>,
    pub prompt: String,
}

/// POST /patch
pub async fn handle_patch(Json(request): Json<PatchRequest>) -> Json<SlidesState> {
    let before = request.slides.len();
    let slides = apply_patch(request.slides, &request.prompt);
    info!("Patched deck: {} -> {} slides", before, slides.len());

    Json(SlidesState { slides })
}
