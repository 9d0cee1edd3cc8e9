//! OSINT Vision processing pipelines
//!
//! Three independent, stateless analyses over one uploaded image:
//! - [`ocr`]: text recognition plus scam-pattern signals
//! - [`metadata`]: EXIF tags, GPS position and privacy warnings
//! - [`forensics`]: content digests, grayscale statistics and a quality score

pub mod decode;
pub mod error;
pub mod forensics;
pub mod metadata;
pub mod ocr;

pub use error::AnalysisError;
pub use forensics::{analyze_forensics, examine};
pub use metadata::{analyze_metadata, extract_metadata};
pub use ocr::{OcrAnalyzer, TesseractEngine, TextRecognizer, UnavailableRecognizer};

/// Run CPU-bound analysis work off the async runtime.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, AnalysisError>
where
    F: FnOnce() -> Result<T, AnalysisError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AnalysisError::Worker(e.to_string()))?
}
