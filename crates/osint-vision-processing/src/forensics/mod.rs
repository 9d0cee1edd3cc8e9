//! Forensics pipeline: content digests, grayscale statistics and scoring

mod digest;
mod scoring;
mod stats;

pub use digest::compute_hashes;
pub use scoring::{assess, findings, quality_score};
pub use stats::{
    analyze_gray, brightness_and_contrast, edge_density, histogram_entropy, laplacian_variance,
    BLUR_THRESHOLD,
};

use bytes::Bytes;
use osint_vision_core::models::ForensicsReport;

use crate::decode::decode_image;
use crate::error::AnalysisError;
use crate::run_blocking;

/// Build the forensics report for one upload. Digests cover the raw bytes;
/// statistics need a successful decode.
pub fn examine(data: &[u8]) -> Result<ForensicsReport, AnalysisError> {
    let hashes = compute_hashes(data);
    let gray = decode_image(data)?.to_grayscale();
    let analysis = analyze_gray(&gray);
    let (quality_score, manipulation_likelihood) = assess(&analysis);

    Ok(ForensicsReport {
        hashes,
        findings: findings(&analysis),
        analysis,
        manipulation_likelihood,
        quality_score,
    })
}

/// [`examine`] on the blocking pool.
#[tracing::instrument(skip(data), fields(bytes = data.len()))]
pub async fn analyze_forensics(data: Bytes) -> Result<ForensicsReport, AnalysisError> {
    let report = run_blocking(move || examine(&data)).await?;
    tracing::debug!(
        quality_score = report.quality_score,
        blur_score = report.analysis.blur_score,
        findings = report.findings.len(),
        "Forensic analysis complete"
    );
    Ok(report)
}
