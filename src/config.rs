//! Configuration management

use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Default request timeout in seconds.
///
/// The backend gives no liveness guarantees, so every request carries a
/// client-side deadline.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without a trailing slash
    pub base_url: String,

    /// Application-level Basic identity for the signin handshake.
    /// Deliberately has no compiled-in default: shipping a fixed secret
    /// inside every client is the failure mode this replaces.
    pub app_user: Option<String>,
    pub app_pass: Option<String>,

    /// Path of the persistent bearer-token mirror
    pub token_path: PathBuf,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables (reads `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("USERFRONT_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .trim_end_matches('/')
            .to_string();

        let app_user = std::env::var("USERFRONT_APP_USER").ok();
        let app_pass = std::env::var("USERFRONT_APP_PASS").ok();

        let token_path = std::env::var("USERFRONT_TOKEN_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("userfront")
                    .join("token.json")
            });

        let timeout_secs = std::env::var("USERFRONT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            base_url,
            app_user,
            app_pass,
            token_path,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
