use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::signal::SignalType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// GPS position in signed decimal degrees (south and west are negative)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DecimalCoords {
    pub latitude: f64,
    pub longitude: f64,
}

/// A metadata finding. Always structured, never a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetadataWarning {
    #[serde(rename = "type")]
    pub kind: SignalType,
    pub message: String,
}

impl MetadataWarning {
    pub fn new(kind: SignalType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Response of the metadata endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetadataReport {
    pub filename: String,
    pub format: String,
    pub mode: String,
    pub size: ImageSize,
    pub file_size: u64,
    /// Tag name to decoded value
    #[schema(value_type = Object)]
    pub exif: BTreeMap<String, serde_json::Value>,
    /// GPS sub-tag name to decoded value, plus `decimal_coords` when computable
    #[schema(value_type = Object)]
    pub gps: BTreeMap<String, serde_json::Value>,
    pub warnings: Vec<MetadataWarning>,
}
