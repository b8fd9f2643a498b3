use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /health
/// Returns a fixed-shape liveness record with the current timestamp.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "vitae-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
