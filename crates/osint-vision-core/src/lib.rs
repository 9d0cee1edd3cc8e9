//! OSINT Vision Core Library
//!
//! This crate provides the report models, error types and configuration
//! shared by the processing pipelines and the HTTP API.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{Config, OcrConfig, ServerConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
