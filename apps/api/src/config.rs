use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::render::labels::LabelVariant;

/// Application configuration loaded from environment variables.
/// Panics at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Root directory for uploaded portrait photos.
    pub photo_dir: PathBuf,
    /// Which label table the composer uses (uz-cyrl | uz-latn).
    pub label_variant: LabelVariant,
    /// Upper bound on a single PDF render.
    pub render_timeout: Duration,
    /// Explicit Chromium binary path; autodetected when unset.
    pub chrome_binary: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let label_variant = match std::env::var("LABEL_VARIANT") {
            Ok(v) => LabelVariant::parse(&v)
                .with_context(|| format!("LABEL_VARIANT '{v}' is not a known variant"))?,
            Err(_) => LabelVariant::UzbekCyrillic,
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            photo_dir: PathBuf::from(
                std::env::var("PHOTO_DIR").unwrap_or_else(|_| "storage/photos".to_string()),
            ),
            label_variant,
            render_timeout: Duration::from_secs(
                std::env::var("RENDER_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse::<u64>()
                    .context("RENDER_TIMEOUT_SECS must be a number of seconds")?,
            ),
            chrome_binary: std::env::var("CHROME_BINARY").ok().map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
