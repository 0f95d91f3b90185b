mod config;
mod errors;
mod export;
mod generation;
mod models;
mod patch;
mod routes;
mod state;

use anyhow::Result;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::store::ExportStore;
use crate::generation::generator::{RuleBasedGenerator, SlideGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Deck API v{}", env!("CARGO_PKG_VERSION"));

    let exports = ExportStore::open(&config.export_dir)?;
    info!("Export directory: {}", exports.dir().display());
    info!("Static directory: {}", config.static_dir.display());

    let generator: Arc<dyn SlideGenerator> = Arc::new(RuleBasedGenerator);
    info!("Slide generator initialized (backend: {})", generator.backend());

    let state = AppState {
        config: config.clone(),
        generator,
        exports,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
