//! EXIF tag reading
//!
//! Tags come out keyed by their human-readable name. A tag whose value cannot
//! be represented is kept with a placeholder instead of failing the request.

use exif::{Context, In, Reader, Tag, Value};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::io::Cursor;

/// Placeholder for tags whose value could not be decoded.
pub const UNDECODABLE: &str = "Unable to decode";

/// Name under which the GPS sub-tags are reported in the general tag map.
pub const GPS_INFO: &str = "GPSInfo";

/// Tags never copied to the output.
const EXCLUDED_TAGS: &[Tag] = &[Tag::MakerNote, Tag::UserComment];

/// Tags of the primary image, split into general and GPS sub-tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSet {
    /// An EXIF block was found, even if every field in it was excluded.
    pub found: bool,
    pub exif: BTreeMap<String, JsonValue>,
    pub gps: BTreeMap<String, JsonValue>,
}

impl TagSet {
    pub fn has_gps(&self) -> bool {
        !self.gps.is_empty()
    }

    /// Tag value rendered as plain text.
    pub fn text(&self, name: &str) -> Option<String> {
        self.exif.get(name).map(json_text)
    }
}

/// Read EXIF from any container kamadak-exif understands. A missing or
/// unparseable block yields an empty set.
pub fn read_tags(data: &[u8]) -> TagSet {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(data)) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return TagSet::default(),
        Err(e) => {
            tracing::debug!(error = %e, "Unreadable EXIF block, treating image as untagged");
            return TagSet::default();
        }
    };

    // The reader follows the Exif, GPS and Interop pointers itself and never
    // yields them as fields, so GPSInfo is rebuilt from the GPS sub-tags.
    let mut tags = TagSet {
        found: true,
        ..TagSet::default()
    };
    for field in exif.fields() {
        if field.ifd_num != In::PRIMARY || EXCLUDED_TAGS.contains(&field.tag) {
            continue;
        }

        let name = field.tag.to_string();
        let value = value_to_json(&field.value);
        if field.tag.context() == Context::Gps {
            tags.gps.insert(name, value);
        } else {
            tags.exif.insert(name, value);
        }
    }

    if !tags.gps.is_empty() {
        let gps_info = tags.gps.clone().into_iter().collect();
        tags.exif
            .insert(GPS_INFO.to_string(), JsonValue::Object(gps_info));
    }

    tags
}

/// Decode bytes as UTF-8, dropping invalid sequences and trailing NULs.
pub fn decode_utf8_dropping_invalid(bytes: &[u8]) -> String {
    let decoded: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
    decoded.trim_end_matches('\0').to_string()
}

pub fn value_to_json(value: &Value) -> JsonValue {
    let items: Option<Vec<JsonValue>> = match value {
        Value::Ascii(strings) => Some(
            strings
                .iter()
                .map(|s| JsonValue::String(decode_utf8_dropping_invalid(s).trim().to_string()))
                .collect(),
        ),
        Value::Byte(bytes) | Value::Undefined(bytes, _) => {
            return JsonValue::String(decode_utf8_dropping_invalid(bytes));
        }
        Value::Short(v) => Some(v.iter().map(|&n| JsonValue::from(n)).collect()),
        Value::Long(v) => Some(v.iter().map(|&n| JsonValue::from(n)).collect()),
        Value::SByte(v) => Some(v.iter().map(|&n| JsonValue::from(n)).collect()),
        Value::SShort(v) => Some(v.iter().map(|&n| JsonValue::from(n)).collect()),
        Value::SLong(v) => Some(v.iter().map(|&n| JsonValue::from(n)).collect()),
        Value::Rational(v) => v.iter().map(|r| float(r.to_f64())).collect(),
        Value::SRational(v) => v.iter().map(|r| float(r.to_f64())).collect(),
        Value::Float(v) => v.iter().map(|&f| float(f64::from(f))).collect(),
        Value::Double(v) => v.iter().map(|&f| float(f)).collect(),
        _ => None,
    };

    match items {
        Some(mut items) if items.len() == 1 => items.remove(0),
        Some(items) => JsonValue::Array(items),
        None => JsonValue::String(UNDECODABLE.to_string()),
    }
}

fn float(value: f64) -> Option<JsonValue> {
    serde_json::Number::from_f64(value).map(JsonValue::Number)
}

fn json_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exif::Rational;
    use serde_json::json;

    #[test]
    fn test_ascii_single_value_is_string() {
        let value = Value::Ascii(vec![b"Canon".to_vec()]);
        assert_eq!(value_to_json(&value), json!("Canon"));
    }

    #[test]
    fn test_bytes_drop_invalid_utf8() {
        let value = Value::Undefined(vec![b'a', 0xff, b'b', 0xfe, b'c'], 0);
        assert_eq!(value_to_json(&value), json!("abc"));
    }

    #[test]
    fn test_numeric_arrays() {
        assert_eq!(value_to_json(&Value::Short(vec![1])), json!(1));
        assert_eq!(value_to_json(&Value::Long(vec![2, 3])), json!([2, 3]));
    }

    #[test]
    fn test_rationals_become_floats() {
        let value = Value::Rational(vec![
            Rational::from((40, 1)),
            Rational::from((26, 1)),
            Rational::from((4655, 100)),
        ]);
        assert_eq!(value_to_json(&value), json!([40.0, 26.0, 46.55]));
    }

    #[test]
    fn test_zero_denominator_is_undecodable() {
        let value = Value::Rational(vec![Rational::from((1, 0))]);
        assert_eq!(value_to_json(&value), json!(UNDECODABLE));
    }

    #[test]
    fn test_unknown_value_is_undecodable() {
        assert_eq!(value_to_json(&Value::Unknown(99, 1, 0)), json!(UNDECODABLE));
    }

    #[test]
    fn test_read_tags_without_exif() {
        let tags = read_tags(b"not an image at all");
        assert!(!tags.found);
        assert!(tags.exif.is_empty());
        assert!(!tags.has_gps());
    }
}
