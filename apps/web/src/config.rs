use anyhow::{Context, Result};

/// Where the screening tool submits its batches when nothing else is
/// configured. The analysis service is a separate deployment.
pub const DEFAULT_SCREENING_ENDPOINT: &str = "http://localhost:3001/api/screen";

/// Application configuration loaded from environment variables.
/// Every variable has a workable default for local development.
#[derive(Debug, Clone)]
pub struct Config {
    pub screening_endpoint: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            screening_endpoint: std::env::var("SCREENING_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_SCREENING_ENDPOINT.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
