use axum::response::Json;
use serde_json::Value;
use tracing::info;

// Las listas live/dead ya no se guardan; el contrato las reporta vacías.
pub async fn get_states() -> Json<Value> {
    info!("Getting card states");

    Json(serde_json::json!({
        "live": [],
        "dead": []
    }))
}
