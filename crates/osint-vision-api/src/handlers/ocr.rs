use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use osint_vision_core::models::OcrReport;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;

/// Recognize text in the uploaded image and flag scam patterns
///
/// The image is converted to grayscale before recognition. An empty result
/// is reported with a fixed fallback text and no signals.
#[utoipa::path(
    post,
    path = "/api/ocr",
    tag = "analysis",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Text and scam signals", body = OcrReport),
        (status = 400, description = "Missing or malformed upload", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Decode or recognition failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "ocr"))]
pub async fn run_ocr(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<OcrReport>, HttpAppError> {
    let upload = extract_multipart_file(multipart, state.config.server.max_file_size_bytes).await?;
    tracing::debug!(
        filename = %upload.filename,
        content_type = %upload.content_type,
        bytes = upload.data.len(),
        "Running OCR"
    );

    let report = state.ocr.analyze(upload.data).await?;
    Ok(Json(report))
}
