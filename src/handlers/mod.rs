pub mod metadata;

use axum::Json;
use serde_json::{json, Value};

use crate::scoring;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "metatag-server",
        "version": env!("CARGO_PKG_VERSION"),
        "platforms": scoring::platform_names(),
    }))
}
