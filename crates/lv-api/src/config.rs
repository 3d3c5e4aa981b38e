//! API server configuration.

use serde::Deserialize;

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the per-category log files.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("LOGVIEW_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("LOGVIEW_PORT")
            && let Ok(port) = port.parse()
        {
            config.port = port;
        }
        if let Ok(dir) = std::env::var("LOGVIEW_LOG_DIR") {
            config.log_dir = dir;
        }
        config
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_dir: default_log_dir(),
        }
    }
}
