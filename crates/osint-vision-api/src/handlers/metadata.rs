use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use osint_vision_core::models::MetadataReport;
use osint_vision_processing::analyze_metadata;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;

/// Extract EXIF metadata and privacy warnings
///
/// GPS positions are converted to signed decimal degrees. Tags that cannot be
/// decoded are reported as "Unable to decode" instead of failing the request.
#[utoipa::path(
    post,
    path = "/api/metadata",
    tag = "analysis",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image properties, tags and warnings", body = MetadataReport),
        (status = 400, description = "Missing or malformed upload", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Image could not be decoded", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "metadata"))]
pub async fn extract_metadata(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<MetadataReport>, HttpAppError> {
    let upload = extract_multipart_file(multipart, state.config.server.max_file_size_bytes).await?;
    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        "Extracting metadata"
    );

    let report = analyze_metadata(upload.data, upload.filename).await?;
    Ok(Json(report))
}
