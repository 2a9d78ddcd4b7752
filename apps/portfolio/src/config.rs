use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::loader::ValidationPolicy;

/// Application configuration loaded from environment variables.
/// Every portfolio setting is optional; the embedded resume and section config
/// are used when nothing is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub resume_path: Option<PathBuf>,
    pub sections_path: Option<PathBuf>,
    pub template: Option<String>,
    pub palette: Option<String>,
    pub config_policy: ValidationPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config_policy = match optional_env("PORTFOLIO_CONFIG_POLICY") {
            Some(value) => ValidationPolicy::parse(&value).ok_or_else(|| {
                anyhow!("PORTFOLIO_CONFIG_POLICY must be 'strict' or 'lenient', got '{value}'")
            })?,
            None => ValidationPolicy::default(),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            resume_path: optional_env("PORTFOLIO_RESUME_PATH").map(PathBuf::from),
            sections_path: optional_env("PORTFOLIO_SECTIONS_PATH").map(PathBuf::from),
            template: optional_env("PORTFOLIO_TEMPLATE"),
            palette: optional_env("PORTFOLIO_PALETTE"),
            config_policy,
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
