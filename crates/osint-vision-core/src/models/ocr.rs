use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::signal::Signal;

/// Language of the recognized text. Detection is not implemented, so the
/// only value is an explicit "not computed" marker rather than a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LanguageDetection {
    #[default]
    NotComputed,
}

/// Response of the OCR endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OcrReport {
    /// Extracted text, or a fallback sentence when nothing was recognized
    pub text: String,
    pub signals: Vec<Signal>,
    /// Length-based heuristic, 60.0 to 98.0
    pub confidence: f64,
    pub language: LanguageDetection,
}
