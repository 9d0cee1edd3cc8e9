//! Configuration module
//!
//! Settings are read from the process environment (and a `.env` file when
//! present). Numeric values that fail to parse fall back to their defaults;
//! `PORT` is the only hard failure.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8000;
const MAX_FILE_SIZE_MB: usize = 20;
const HTTP_CONCURRENCY_LIMIT: usize = 1024;
const OCR_TIMEOUT_SECS: u64 = 30;
const TESSERACT_LANG: &str = "eng";

/// HTTP server settings
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub max_file_size_bytes: usize,
    pub http_concurrency_limit: usize,
}

/// Text recognition engine settings
#[derive(Clone, Debug)]
pub struct OcrConfig {
    /// Explicit engine binary; `None` means discover it on `PATH` or in well-known locations.
    pub tesseract_path: Option<PathBuf>,
    pub language: String,
    pub timeout: Duration,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: DEFAULT_PORT,
                environment: "development".to_string(),
                cors_origins: vec!["*".to_string()],
                max_file_size_bytes: MAX_FILE_SIZE_MB * 1024 * 1024,
                http_concurrency_limit: HTTP_CONCURRENCY_LIMIT,
            },
            ocr: OcrConfig {
                tesseract_path: None,
                language: TESSERACT_LANG.to_string(),
                timeout: Duration::from_secs(OCR_TIMEOUT_SECS),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_file_size_mb = lookup("MAX_FILE_SIZE_MB")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_FILE_SIZE_MB);

        let server = ServerConfig {
            port: lookup("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            http_concurrency_limit: lookup("HTTP_CONCURRENCY_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(HTTP_CONCURRENCY_LIMIT),
        };

        let ocr = OcrConfig {
            tesseract_path: lookup("TESSERACT_PATH")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            language: lookup("TESSERACT_LANG")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| TESSERACT_LANG.to_string()),
            timeout: Duration::from_secs(
                lookup("OCR_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(OCR_TIMEOUT_SECS),
            ),
        };

        Ok(Config { server, ocr })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.server.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Fail fast on settings that would make every request fail.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }

        if self.server.http_concurrency_limit == 0 {
            return Err(anyhow::anyhow!(
                "HTTP_CONCURRENCY_LIMIT must be greater than 0"
            ));
        }

        if self.ocr.timeout.is_zero() {
            return Err(anyhow::anyhow!("OCR_TIMEOUT_SECS must be greater than 0"));
        }

        if let Some(path) = &self.ocr.tesseract_path {
            if !path.is_file() {
                return Err(anyhow::anyhow!(
                    "TESSERACT_PATH points to a missing file: {}",
                    path.display()
                ));
            }
        }

        if self.is_production() && self.server.cors_origins.iter().any(|o| o == "*") {
            tracing::warn!("CORS configured to allow all origins in production");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.server.max_file_size_bytes, 20 * 1024 * 1024);
        assert_eq!(config.ocr.tesseract_path, None);
        assert_eq!(config.ocr.language, "eng");
        assert_eq!(config.ocr.timeout, Duration::from_secs(30));
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9100"),
            ("APP_ENV", "prod"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
            ("MAX_FILE_SIZE_MB", "5"),
            ("TESSERACT_LANG", "eng+fra"),
            ("OCR_TIMEOUT_SECS", "7"),
        ])
        .unwrap();
        assert_eq!(config.server.port, 9100);
        assert!(config.is_production());
        assert_eq!(
            config.server.cors_origins,
            vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ]
        );
        assert_eq!(config.server.max_file_size_bytes, 5 * 1024 * 1024);
        assert_eq!(config.ocr.language, "eng+fra");
        assert_eq!(config.ocr.timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn test_unparseable_numbers_fall_back() {
        let config = config_from(&[("OCR_TIMEOUT_SECS", "soon"), ("MAX_FILE_SIZE_MB", "big")])
            .unwrap();
        assert_eq!(config.ocr.timeout, Duration::from_secs(30));
        assert_eq!(config.server.max_file_size_bytes, 20 * 1024 * 1024);
    }

    #[test]
    fn test_validate_rejects_missing_engine_path() {
        let config = config_from(&[("TESSERACT_PATH", "/definitely/not/here/tesseract")]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = config_from(&[("OCR_TIMEOUT_SECS", "0")]).unwrap();
        assert!(config.validate().is_err());
    }
}
