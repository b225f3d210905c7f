use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::render::RenderStyle;

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults suit a local single-user install.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `data.json`.
    pub data_dir: PathBuf,
    /// Directory generated documents are written to.
    pub output_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub style: RenderStyle,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = RenderStyle::default();
        let style = RenderStyle {
            font_family: env_or("RESUME_FONT_FAMILY", &defaults.font_family),
            body_size_pt: parse_env("RESUME_FONT_SIZE_PT", defaults.body_size_pt)?,
            page_header: parse_env("RESUME_PAGE_HEADER", defaults.page_header)?,
            ..defaults
        };

        Ok(Config {
            data_dir: PathBuf::from(env_or("RESUME_DATA_DIR", "./data")),
            output_dir: PathBuf::from(env_or("RESUME_OUTPUT_DIR", "./output")),
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            style,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}
