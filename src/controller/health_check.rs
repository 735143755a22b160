use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router {
    Router::new().route("/health", get(get_health_check))
}

/// Liveness only, the upstream is not probed
async fn get_health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
