//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use osint_vision_core::Config;
use osint_vision_processing::{TesseractEngine, TextRecognizer, UnavailableRecognizer};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first so validation warnings are visible
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|f| f.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    crate::telemetry::init_telemetry(json_logs)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    // Validate configuration - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    let state = Arc::new(build_state(config.clone()));

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

/// Discover the OCR engine and assemble the shared state. A missing engine
/// is not fatal: OCR requests fail and `/health` reports it.
pub fn build_state(config: Config) -> AppState {
    match TesseractEngine::discover(config.ocr.tesseract_path.as_deref(), &config.ocr.language) {
        Some(engine) => {
            let path = engine.binary().to_path_buf();
            tracing::info!(
                engine_path = %path.display(),
                language = %config.ocr.language,
                timeout_secs = config.ocr.timeout.as_secs(),
                "OCR engine found"
            );
            let recognizer: Arc<dyn TextRecognizer> = Arc::new(engine);
            AppState::new(config, recognizer, Some(path))
        }
        None => {
            tracing::warn!("OCR engine not found; /api/ocr will fail until tesseract is installed");
            AppState::new(config, Arc::new(UnavailableRecognizer), None)
        }
    }
}
