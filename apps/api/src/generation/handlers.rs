//! Axum route handler for the Generation API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::{Section, SlidesState};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub sections: Vec<Section>,
}

/// POST /generate
///
/// Turns entry-sheet sections into a full deck.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<SlidesState>, AppError> {
    if request.sections.is_empty() {
        return Err(AppError::Validation("sections cannot be empty".to_string()));
    }

    let slides = state.generator.generate(&request.sections).await?;
    info!(
        "Generated {} slides from {} sections (backend: {})",
        slides.len(),
        request.sections.len(),
        state.generator.backend()
    );

    Ok(Json(SlidesState { slides }))
}
