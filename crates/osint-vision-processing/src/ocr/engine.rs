//! Text recognition engines
//!
//! The engine sits behind [`TextRecognizer`] so the pipeline can run against
//! the Tesseract CLI in production and a stub in tests.

use async_trait::async_trait;
use image::{GrayImage, ImageFormat};
use std::ffi::OsString;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::AnalysisError;

#[cfg(windows)]
const TESSERACT_BINARY: &str = "tesseract.exe";
#[cfg(not(windows))]
const TESSERACT_BINARY: &str = "tesseract";

const WELL_KNOWN_LOCATIONS: &[&str] = &[
    "/usr/bin/tesseract",
    "/usr/local/bin/tesseract",
    "/opt/homebrew/bin/tesseract",
    "/opt/local/bin/tesseract",
    r"C:\Program Files\Tesseract-OCR\tesseract.exe",
    r"C:\Program Files (x86)\Tesseract-OCR\tesseract.exe",
];

/// Turns a grayscale pixel grid into text.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Short engine name for logs and health output
    fn name(&self) -> &'static str;

    /// Whether the engine can currently serve requests
    fn is_available(&self) -> bool {
        true
    }

    async fn recognize(&self, image: &GrayImage) -> Result<String, AnalysisError>;
}

/// Find the Tesseract binary.
///
/// An explicit path wins when it exists. Otherwise the `PATH` directories are
/// searched in order, then a fixed list of common install locations.
pub fn locate_tesseract(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return path.is_file().then(|| path.to_path_buf());
    }

    search_path_var(std::env::var_os("PATH"), TESSERACT_BINARY).or_else(|| {
        WELL_KNOWN_LOCATIONS
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.is_file())
    })
}

fn search_path_var(path_var: Option<OsString>, binary: &str) -> Option<PathBuf> {
    let path_var = path_var?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}

/// Tesseract CLI adapter: PNG on stdin, plain text on stdout.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: PathBuf,
    language: String,
}

impl TesseractEngine {
    pub fn new(binary: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }

    /// Build an engine from a discovered binary, if any.
    pub fn discover(explicit: Option<&Path>, language: &str) -> Option<Self> {
        locate_tesseract(explicit).map(|binary| Self::new(binary, language))
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn encode_png(image: &GrayImage) -> Result<Vec<u8>, AnalysisError> {
        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }
}

#[async_trait]
impl TextRecognizer for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    async fn recognize(&self, image: &GrayImage) -> Result<String, AnalysisError> {
        let png = Self::encode_png(image)?;

        // kill_on_drop reaps the child when the caller's timeout drops this future.
        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", self.language.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                AnalysisError::Recognition(format!(
                    "failed to start {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AnalysisError::Recognition("engine stdin unavailable".to_string()))?;
        let feed = async move {
            stdin.write_all(&png).await?;
            stdin.shutdown().await
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(status = %output.status, stderr = %stderr.trim(), "tesseract failed");
            return Err(AnalysisError::Recognition(stderr.trim().to_string()));
        }
        if let Err(e) = fed {
            tracing::warn!(error = %e, "tesseract closed stdin early");
        }

        Ok(normalize_output(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Strip surrounding whitespace and the page-break form feed Tesseract appends.
fn normalize_output(raw: &str) -> String {
    raw.trim().to_string()
}

/// Stands in when no engine binary could be found.
pub struct UnavailableRecognizer;

#[async_trait]
impl TextRecognizer for UnavailableRecognizer {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn recognize(&self, _image: &GrayImage) -> Result<String, AnalysisError> {
        Err(AnalysisError::EngineUnavailable)
    }
}
