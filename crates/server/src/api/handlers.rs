use crate::config::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use beacon_mcp::protocol::{PROTOCOL_VERSION, SERVER_NAME};
use std::sync::Arc;

/// GET /mcp - static capability and version info, not a JSON-RPC call
pub async fn mcp_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "protocol": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {
                "listChanged": true,
            },
        },
    }))
}

/// POST /mcp - one JSON-RPC request per body. The dispatcher produces an
/// envelope for every input, so the HTTP status is always 200.
pub async fn mcp_call(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let response = state.dispatcher.dispatch_bytes(&body).await;
    Json(response)
}

/// OPTIONS /mcp - cross-origin preflight, answered with no body
pub async fn mcp_preflight() -> StatusCode {
    StatusCode::OK
}
