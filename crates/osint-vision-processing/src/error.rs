use std::time::Duration;

/// Failures of the analysis pipelines. The API reports every variant as a
/// processing failure.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Unable to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Unable to read image data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text recognition engine not found (set TESSERACT_PATH or install tesseract)")]
    EngineUnavailable,

    #[error("Text recognition failed: {0}")]
    Recognition(String),

    #[error("Text recognition timed out after {}s", .0.as_secs())]
    RecognitionTimeout(Duration),

    #[error("Analysis task failed: {0}")]
    Worker(String),
}
