use std::sync::Arc;

use crate::config::Config;
use crate::export::store::ExportStore;
use crate::generation::generator::SlideGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable deck generator. Default: RuleBasedGenerator.
    pub generator: Arc<dyn SlideGenerator>,
    /// Owns the export directory that `/export` writes to and `/download` reads from.
    pub exports: ExportStore,
}
