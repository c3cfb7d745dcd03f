use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a default; a missing `MISTRAL_API_KEY` puts the service
/// in demo mode, where every provider call falls back to the static tables.
#[derive(Debug, Clone)]
pub struct Config {
    pub mistral_api_key: Option<String>,
    pub mistral_base_url: String,
    pub chat_model: String,
    pub ocr_model: String,
    pub upload_dir: PathBuf,
    pub default_location: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            mistral_api_key: optional_env("MISTRAL_API_KEY"),
            mistral_base_url: env_or("MISTRAL_BASE_URL", "https://api.mistral.ai/v1"),
            chat_model: env_or("MISTRAL_CHAT_MODEL", "mistral-medium-2505"),
            ocr_model: env_or("MISTRAL_OCR_MODEL", "mistral-ocr-latest"),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "public/uploads")),
            default_location: env_or("DEFAULT_LOCATION", "Kenya"),
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Demo-mode config rooted at `upload_dir`.
    #[cfg(test)]
    pub fn for_tests(upload_dir: impl Into<PathBuf>) -> Self {
        Config {
            mistral_api_key: None,
            mistral_base_url: "http://127.0.0.1:9/v1".to_string(),
            chat_model: "mistral-medium-2505".to_string(),
            ocr_model: "mistral-ocr-latest".to_string(),
            upload_dir: upload_dir.into(),
            default_location: "Kenya".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
