use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceEndpoints {
    pub ocr: &'static str,
    pub metadata: &'static str,
    pub forensics: &'static str,
    pub analyze: &'static str,
    pub health: &'static str,
    pub docs: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceDescriptor {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: ServiceEndpoints,
}

/// Service descriptor listing the analysis endpoints
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses(
        (status = 200, description = "Service name, version and endpoint paths", body = ServiceDescriptor)
    )
)]
pub async fn service_info() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        service: "OSINT Vision API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ServiceEndpoints {
            ocr: "/api/ocr",
            metadata: "/api/metadata",
            forensics: "/api/forensics",
            analyze: "/api/analyze",
            health: "/health",
            docs: "/docs",
        },
    })
}
