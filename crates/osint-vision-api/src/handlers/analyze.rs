use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use osint_vision_core::models::{ForensicsReport, MetadataReport, OcrReport};
use osint_vision_processing::{analyze_forensics, analyze_metadata, AnalysisError};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;

/// One pipeline's outcome: its report, or the message it failed with.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Section<T> {
    Report(T),
    Failed { error: String },
}

impl<T> From<Result<T, AnalysisError>> for Section<T> {
    fn from(result: Result<T, AnalysisError>) -> Self {
        match result {
            Ok(report) => Section::Report(report),
            Err(err) => {
                tracing::warn!(error = %err, "Analysis section failed");
                Section::Failed {
                    error: format!("Processing failed: {}", err),
                }
            }
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// `OcrReport` or `{error}`
    #[schema(value_type = Object)]
    pub ocr: Section<OcrReport>,
    /// `MetadataReport` or `{error}`
    #[schema(value_type = Object)]
    pub metadata: Section<MetadataReport>,
    /// `ForensicsReport` or `{error}`
    #[schema(value_type = Object)]
    pub forensics: Section<ForensicsReport>,
}

/// Run OCR, metadata and forensics over one upload
///
/// The three pipelines run concurrently on the same bytes. A failing section
/// is reported in place and does not fail the others.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analysis",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Per-section reports", body = AnalyzeResponse),
        (status = 400, description = "Missing or malformed upload", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "analyze"))]
pub async fn analyze_image(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, HttpAppError> {
    let upload = extract_multipart_file(multipart, state.config.server.max_file_size_bytes).await?;
    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        "Running full analysis"
    );

    let (ocr, metadata, forensics) = tokio::join!(
        state.ocr.analyze(upload.data.clone()),
        analyze_metadata(upload.data.clone(), upload.filename),
        analyze_forensics(upload.data),
    );

    Ok(Json(AnalyzeResponse {
        ocr: ocr.into(),
        metadata: metadata.into(),
        forensics: forensics.into(),
    }))
}
