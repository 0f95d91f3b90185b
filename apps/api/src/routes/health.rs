use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
///
/// Reports the generator backend and whether the export directory is still
/// there. `status` is `"degraded"` when it is missing.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let exports_ready = tokio::fs::metadata(state.exports.dir())
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    Json(json!({
        "status": if exports_ready { "ok" } else { "degraded" },
        "service": "deck-api",
        "version": env!("CARGO_PKG_VERSION"),
        "generator": state.generator.backend(),
        "exports_ready": exports_ready,
    }))
}
