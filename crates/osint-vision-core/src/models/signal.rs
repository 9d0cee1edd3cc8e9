use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity of a heuristic signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    Danger,
    Warning,
    Info,
}

/// A labeled heuristic result. Signals are evaluated independently; none
/// depends on another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Signal {
    #[serde(rename = "type")]
    pub kind: SignalType,
    pub label: String,
    /// 0-100
    pub confidence: u8,
}

impl Signal {
    pub fn new(kind: SignalType, label: impl Into<String>, confidence: u8) -> Self {
        Self {
            kind,
            label: label.into(),
            confidence: confidence.min(100),
        }
    }

    pub fn danger(label: impl Into<String>, confidence: u8) -> Self {
        Self::new(SignalType::Danger, label, confidence)
    }

    pub fn warning(label: impl Into<String>, confidence: u8) -> Self {
        Self::new(SignalType::Warning, label, confidence)
    }

    pub fn info(label: impl Into<String>, confidence: u8) -> Self {
        Self::new(SignalType::Info, label, confidence)
    }
}
