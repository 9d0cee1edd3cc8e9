//! Metadata pipeline: EXIF tags, GPS position and privacy warnings

mod gps;
mod tags;
mod warnings;

pub use gps::{apply_reference, decimal_coords, dms_to_decimal};
pub use tags::{read_tags, TagSet, GPS_INFO, UNDECODABLE};
pub use warnings::build_warnings;

use bytes::Bytes;
use osint_vision_core::models::{ImageSize, MetadataReport};

use crate::decode::decode_image;
use crate::error::AnalysisError;
use crate::run_blocking;

/// Key under which the computed position is added to the GPS map.
pub const DECIMAL_COORDS: &str = "decimal_coords";

/// Build the metadata report for one upload. The image must decode even
/// though only its header fields are reported.
pub fn extract_metadata(data: &[u8], filename: &str) -> Result<MetadataReport, AnalysisError> {
    let decoded = decode_image(data)?;
    let (width, height) = decoded.dimensions();

    let tags = read_tags(data);
    let coords = decimal_coords(&tags.gps);
    let warnings = build_warnings(&tags, coords);

    let TagSet { exif, mut gps, .. } = tags;
    if let Some(coords) = coords {
        gps.insert(
            DECIMAL_COORDS.to_string(),
            serde_json::json!({
                "latitude": coords.latitude,
                "longitude": coords.longitude,
            }),
        );
    }

    Ok(MetadataReport {
        filename: filename.to_string(),
        format: decoded.format_name(),
        mode: decoded.mode_name().to_string(),
        size: ImageSize { width, height },
        file_size: data.len() as u64,
        exif,
        gps,
        warnings,
    })
}

/// [`extract_metadata`] on the blocking pool.
#[tracing::instrument(skip(data), fields(bytes = data.len()))]
pub async fn analyze_metadata(
    data: Bytes,
    filename: String,
) -> Result<MetadataReport, AnalysisError> {
    let report = run_blocking(move || extract_metadata(&data, &filename)).await?;
    tracing::debug!(
        tags = report.exif.len(),
        gps_tags = report.gps.len(),
        warnings = report.warnings.len(),
        "Metadata extraction complete"
    );
    Ok(report)
}
