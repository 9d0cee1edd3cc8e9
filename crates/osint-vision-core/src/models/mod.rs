//! Report models
//!
//! Every model here is a request-scoped value object: built by one analysis
//! pipeline, serialized into the response, then dropped.

mod forensics;
mod metadata;
mod ocr;
mod signal;

pub use forensics::{ForensicsReport, ImageAnalysis, ImageHashes, ManipulationLikelihood};
pub use metadata::{DecimalCoords, ImageSize, MetadataReport, MetadataWarning};
pub use ocr::{LanguageDetection, OcrReport};
pub use signal::{Signal, SignalType};
