//! Application state shared by all handlers.
//!
//! Nothing here is mutated after startup; every request works on its own
//! upload and only reads the configuration and the OCR analyzer.

use osint_vision_core::Config;
use osint_vision_processing::{OcrAnalyzer, TextRecognizer};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ocr: OcrAnalyzer,
    /// Binary backing the recognizer, when it is an external engine.
    pub ocr_engine_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(
        config: Config,
        recognizer: Arc<dyn TextRecognizer>,
        ocr_engine_path: Option<PathBuf>,
    ) -> Self {
        let ocr = OcrAnalyzer::new(recognizer, config.ocr.timeout);
        Self {
            config,
            ocr,
            ocr_engine_path,
        }
    }
}
