//! Degree/minute/second to signed decimal conversion

use osint_vision_core::models::DecimalCoords;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

pub const LATITUDE: &str = "GPSLatitude";
pub const LATITUDE_REF: &str = "GPSLatitudeRef";
pub const LONGITUDE: &str = "GPSLongitude";
pub const LONGITUDE_REF: &str = "GPSLongitudeRef";

/// `d + m/60 + s/3600`, unsigned.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Negate `value` unless `reference` is the positive hemisphere ("N" or "E").
pub fn apply_reference(value: f64, reference: &str, positive: &str) -> f64 {
    if reference.trim() == positive {
        value
    } else {
        -value
    }
}

/// Coordinates from GPS sub-tags, when both value and reference exist for
/// latitude and longitude.
pub fn decimal_coords(gps: &BTreeMap<String, JsonValue>) -> Option<DecimalCoords> {
    let latitude = dms(gps.get(LATITUDE)?)?;
    let latitude_ref = gps.get(LATITUDE_REF)?.as_str()?;
    let longitude = dms(gps.get(LONGITUDE)?)?;
    let longitude_ref = gps.get(LONGITUDE_REF)?.as_str()?;

    Some(DecimalCoords {
        latitude: apply_reference(
            dms_to_decimal(latitude[0], latitude[1], latitude[2]),
            latitude_ref,
            "N",
        ),
        longitude: apply_reference(
            dms_to_decimal(longitude[0], longitude[1], longitude[2]),
            longitude_ref,
            "E",
        ),
    })
}

fn dms(value: &JsonValue) -> Option<[f64; 3]> {
    match value.as_array()?.as_slice() {
        [d, m, s] => Some([d.as_f64()?, m.as_f64()?, s.as_f64()?]),
        _ => None,
    }
}
