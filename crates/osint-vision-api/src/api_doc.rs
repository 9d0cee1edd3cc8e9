//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use osint_vision_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "OSINT Vision API",
        version = "0.1.0",
        description = "Heuristic image analysis for open-source investigations: OCR with scam-pattern signals, EXIF metadata with privacy warnings, and basic forensics (digests, blur, edges, entropy, exposure)."
    ),
    paths(
        handlers::root::service_info,
        handlers::health::health_check,
        handlers::ocr::run_ocr,
        handlers::metadata::extract_metadata,
        handlers::forensics::run_forensics,
        handlers::analyze::analyze_image,
    ),
    components(schemas(
        models::Signal,
        models::SignalType,
        models::OcrReport,
        models::LanguageDetection,
        models::MetadataReport,
        models::MetadataWarning,
        models::ImageSize,
        models::DecimalCoords,
        models::ForensicsReport,
        models::ImageHashes,
        models::ImageAnalysis,
        models::ManipulationLikelihood,
        handlers::analyze::AnalyzeResponse,
        handlers::health::HealthResponse,
        handlers::root::ServiceDescriptor,
        handlers::root::ServiceEndpoints,
        error::ErrorResponse,
    )),
    tags(
        (name = "analysis", description = "Image analysis pipelines"),
        (name = "health", description = "Service health"),
        (name = "service", description = "Service descriptor")
    )
)]
pub struct ApiDoc;
