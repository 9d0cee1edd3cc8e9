use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// "available" or "unavailable"
    pub ocr_engine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_path: Option<String>,
}

/// Liveness probe. Always 200; the OCR engine status is informational.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let available = state.ocr.recognizer().is_available();

    Json(HealthResponse {
        status: "healthy".to_string(),
        ocr_engine: if available { "available" } else { "unavailable" }.to_string(),
        engine_path: state
            .ocr_engine_path
            .as_ref()
            .map(|p| p.display().to_string()),
    })
}
