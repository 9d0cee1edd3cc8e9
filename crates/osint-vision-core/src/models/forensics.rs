use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::signal::Signal;

/// Content digests of the raw upload, lowercase hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageHashes {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
}

/// Scalar statistics of the grayscale image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageAnalysis {
    pub blur_detected: bool,
    /// Laplacian variance
    pub blur_score: f64,
    /// Fraction of Canny edge pixels, 0.0 to 1.0
    pub edge_density: f64,
    /// Shannon entropy of the 256-bin histogram, in bits
    pub histogram_entropy: f64,
    /// Mean intensity, 0 to 255
    pub brightness: f64,
    /// Intensity standard deviation
    pub contrast: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ManipulationLikelihood {
    Low,
    Medium,
    High,
}

impl ManipulationLikelihood {
    /// Label for a final quality score: high below 60, medium below 80, low otherwise.
    pub fn from_quality_score(score: u8) -> Self {
        if score < 60 {
            ManipulationLikelihood::High
        } else if score < 80 {
            ManipulationLikelihood::Medium
        } else {
            ManipulationLikelihood::Low
        }
    }
}

/// Response of the forensics endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForensicsReport {
    pub hashes: ImageHashes,
    pub analysis: ImageAnalysis,
    pub findings: Vec<Signal>,
    pub manipulation_likelihood: ManipulationLikelihood,
    /// 0-100
    pub quality_score: u8,
}
