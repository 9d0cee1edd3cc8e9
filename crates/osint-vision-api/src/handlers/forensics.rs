use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use osint_vision_core::models::ForensicsReport;
use osint_vision_processing::analyze_forensics;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;

/// Content digests, image statistics and a heuristic quality score
#[utoipa::path(
    post,
    path = "/api/forensics",
    tag = "analysis",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Digests, statistics and findings", body = ForensicsReport),
        (status = 400, description = "Missing or malformed upload", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Image could not be decoded", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "forensics"))]
pub async fn run_forensics(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ForensicsReport>, HttpAppError> {
    let upload = extract_multipart_file(multipart, state.config.server.max_file_size_bytes).await?;
    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        "Running forensic analysis"
    );

    let report = analyze_forensics(upload.data).await?;
    Ok(Json(report))
}
