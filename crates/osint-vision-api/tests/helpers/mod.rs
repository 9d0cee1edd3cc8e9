//! Test helpers: build AppState and router for integration tests.
//!
//! The OCR engine is replaced by in-process recognizers so no Tesseract
//! install is needed. Run with `cargo test -p osint-vision-api`.

#![allow(dead_code)]

pub mod fixtures;

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use image::GrayImage;
use osint_vision_api::setup::routes;
use osint_vision_api::AppState;
use osint_vision_core::Config;
use osint_vision_processing::{AnalysisError, TextRecognizer, UnavailableRecognizer};
use std::sync::Arc;

/// Recognizer that "reads" a fixed string from any image.
pub struct FixedText(pub &'static str);

#[async_trait]
impl TextRecognizer for FixedText {
    fn name(&self) -> &'static str {
        "fixed-text"
    }

    async fn recognize(&self, _image: &GrayImage) -> Result<String, AnalysisError> {
        Ok(self.0.to_string())
    }
}

pub fn server_with(recognizer: Arc<dyn TextRecognizer>) -> TestServer {
    server_with_config(Config::default(), recognizer)
}

pub fn server_with_config(config: Config, recognizer: Arc<dyn TextRecognizer>) -> TestServer {
    let state = Arc::new(AppState::new(config.clone(), recognizer, None));
    let router = routes::setup_routes(&config, state).expect("router builds");
    TestServer::new(router).expect("test server starts")
}

/// Server whose OCR engine reads `text` from every image.
pub fn server_reading(text: &'static str) -> TestServer {
    server_with(Arc::new(FixedText(text)))
}

/// Server without an OCR engine that accepts files up to `max_bytes`.
pub fn server_with_max_file_size(max_bytes: usize) -> TestServer {
    let mut config = Config::default();
    config.server.max_file_size_bytes = max_bytes;
    server_with_config(config, Arc::new(UnavailableRecognizer))
}

/// Server started without any OCR engine.
pub fn server_without_engine() -> TestServer {
    server_with(Arc::new(UnavailableRecognizer))
}

pub fn upload(data: Vec<u8>, file_name: &str, mime_type: &str) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(file_name)
        .mime_type(mime_type);
    MultipartForm::new().add_part("file", part)
}

pub fn png_upload(data: Vec<u8>) -> MultipartForm {
    upload(data, "image.png", "image/png")
}
