//! Privacy and provenance warnings derived from the tag set

use osint_vision_core::models::{DecimalCoords, MetadataWarning, SignalType};

use super::tags::TagSet;

/// Warnings in a fixed order: GPS position, missing metadata, GPS presence,
/// device, software, date mismatch. The position and presence warnings can
/// both fire for one image.
pub fn build_warnings(tags: &TagSet, coords: Option<DecimalCoords>) -> Vec<MetadataWarning> {
    let mut warnings = Vec::new();

    if let Some(coords) = coords {
        warnings.push(MetadataWarning::new(
            SignalType::Danger,
            format!(
                "GPS coordinates found: {:.4}, {:.4}",
                coords.latitude, coords.longitude
            ),
        ));
    }

    if !tags.found {
        warnings.push(MetadataWarning::new(
            SignalType::Info,
            "No EXIF data found - metadata may have been stripped",
        ));
    }

    if tags.has_gps() {
        warnings.push(MetadataWarning::new(
            SignalType::Danger,
            "Image contains GPS location data - privacy risk",
        ));
    }

    let make = tags.text("Make");
    let model = tags.text("Model");
    if make.is_some() || model.is_some() {
        let device = format!(
            "{} {}",
            make.unwrap_or_default(),
            model.unwrap_or_default()
        );
        warnings.push(MetadataWarning::new(
            SignalType::Warning,
            format!("Device identified: {}", device.trim()),
        ));
    }

    if let Some(software) = tags.text("Software") {
        warnings.push(MetadataWarning::new(
            SignalType::Warning,
            format!("Edited with software: {}", software),
        ));
    }

    let modified = tags.text("DateTime");
    let captured = tags.text("DateTimeOriginal");
    if let (Some(modified), Some(captured)) = (modified, captured) {
        if modified != captured {
            warnings.push(MetadataWarning::new(
                SignalType::Warning,
                format!(
                    "Date mismatch: modified {} but captured {}",
                    modified, captured
                ),
            ));
        }
    }

    warnings
}
