use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::adapters::inbound::http::router::AppState;

pub async fn health(State(app_state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "file_provider": app_state.file_provider.identifier(),
    }))
}

/// Assembled registry with credentials masked
pub async fn get_config(State(app_state): State<AppState>) -> Json<Value> {
    Json(app_state.registry.redacted_module_config())
}
