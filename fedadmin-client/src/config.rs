//! Client configuration

use std::path::PathBuf;

/// Configuration for connecting to the federation backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "https://api.federation.example/api/v1")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Authorization header scheme prepended to the token
    pub auth_scheme: String,

    /// Directory holding the persisted session and UI preferences
    pub state_dir: PathBuf,
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            auth_scheme: "Bearer".to_string(),
            state_dir: PathBuf::from(".fedadmin"),
        }
    }

    /// Build from environment variables (`FEDADMIN_API_URL`,
    /// `FEDADMIN_STATE_DIR`, `FEDADMIN_TIMEOUT`), loading `.env` first.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("FEDADMIN_API_URL")
            .unwrap_or_else(|_| "http://localhost:4000/api/v1".to_string());
        let mut config = Self::new(base_url);
        if let Ok(dir) = std::env::var("FEDADMIN_STATE_DIR") {
            config.state_dir = PathBuf::from(dir);
        }
        if let Ok(timeout) = std::env::var("FEDADMIN_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                config.timeout = secs;
            }
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = secs;
        self
    }

    /// Set the authorization scheme
    pub fn with_auth_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.auth_scheme = scheme.into();
        self
    }

    /// Set the state directory
    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_dir = dir.into();
        self
    }
}
