//! OCR pipeline: decode, grayscale, recognize, then evaluate scam signals

mod engine;
mod signals;

pub use engine::{locate_tesseract, TesseractEngine, TextRecognizer, UnavailableRecognizer};
pub use signals::{build_report, detect_signals, text_confidence, NO_TEXT_FALLBACK};

use bytes::Bytes;
use osint_vision_core::models::OcrReport;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::decode::decode_image;
use crate::error::AnalysisError;
use crate::run_blocking;

/// Runs one OCR request end to end with a hard deadline on the engine call.
#[derive(Clone)]
pub struct OcrAnalyzer {
    recognizer: Arc<dyn TextRecognizer>,
    timeout: Duration,
}

impl OcrAnalyzer {
    pub fn new(recognizer: Arc<dyn TextRecognizer>, timeout: Duration) -> Self {
        Self {
            recognizer,
            timeout,
        }
    }

    pub fn recognizer(&self) -> &Arc<dyn TextRecognizer> {
        &self.recognizer
    }

    #[tracing::instrument(
        skip(self, data),
        fields(bytes = data.len(), engine = self.recognizer.name())
    )]
    pub async fn analyze(&self, data: Bytes) -> Result<OcrReport, AnalysisError> {
        let gray = run_blocking(move || Ok(decode_image(&data)?.to_grayscale())).await?;

        let started = Instant::now();
        let extracted = tokio::time::timeout(self.timeout, self.recognizer.recognize(&gray))
            .await
            .map_err(|_| AnalysisError::RecognitionTimeout(self.timeout))??;

        let report = build_report(&extracted);
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            text_chars = extracted.chars().count(),
            signals = report.signals.len(),
            "Text recognition complete"
        );
        Ok(report)
    }
}
