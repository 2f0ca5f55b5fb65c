// Storyboard Core — HTTP API
// axum transport for the storyboard generation pipeline

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::error::StoryboardError;
use crate::state::AppState;
use crate::storyboard::{DEFAULT_STYLE, STYLE_PRESETS};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// A missing script is treated the same as an empty one.
    #[serde(default)]
    pub script: String,
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_script))
        .route("/api/health", get(health_check))
        .route("/api/styles", get(list_styles))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
}

pub async fn start_server(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("[SERVER] Storyboard API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[axum::debug_handler]
async fn analyze_script(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalyzeRequest>,
) -> Response {
    info!(
        "[SERVER] analyze request: {} chars, style '{}'",
        payload.script.len(),
        payload.style
    );

    let pipeline = state.pipeline.lock().await;
    match pipeline.build(&payload.script, &payload.style).await {
        Ok(storyboard) => {
            info!("[SERVER] storyboard complete: {} entries", storyboard.len());
            Json(json!({ "storyboard": storyboard })).into_response()
        }
        Err(err @ StoryboardError::EmptyInput) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
        Err(err @ StoryboardError::GenerationFailed) => {
            error!("[SERVER] {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

async fn health_check() -> Json<serde_json::Value> {
    // Unconditional: reports process liveness, not capability availability.
    Json(json!({ "status": "healthy" }))
}

async fn list_styles() -> Json<&'static [crate::storyboard::StylePreset]> {
    Json(STYLE_PRESETS)
}

/// Unexpected faults surface as a generic 500; the detail stays in the
/// server log and never reaches the caller.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("[SERVER] unexpected fault: {}", detail);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}
