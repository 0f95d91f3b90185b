pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::export::handlers::{handle_download, handle_export};
use crate::generation::handlers::handle_generate;
use crate::patch::handlers::handle_patch;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        // Deck API
        .route("/generate", post(handle_generate))
        .route("/patch", post(handle_patch))
        .route("/export", post(handle_export))
        .route("/download/:filename", get(handle_download))
        // Pages
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/edit", ServeFile::new(static_dir.join("edit.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}
