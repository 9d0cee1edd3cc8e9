//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use osint_vision_core::Config;

/// Validate critical configuration values
///
/// Limits that would make every request fail are rejected. Permissive CORS in
/// production is logged, not rejected.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.server.max_file_size_bytes > 200 * 1024 * 1024 {
        tracing::warn!(
            max_file_size_bytes = config.server.max_file_size_bytes,
            "MAX_FILE_SIZE_MB is very high - decoding large images is memory intensive"
        );
    }

    if config.ocr.timeout.as_secs() > 300 {
        tracing::warn!(
            timeout_secs = config.ocr.timeout.as_secs(),
            "OCR_TIMEOUT_SECS is very high - stalled recognitions hold a request slot that long"
        );
    }

    Ok(())
}
