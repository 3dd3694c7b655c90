//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow any origin)
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: Option<u64>,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    5000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

#[allow(clippy::unnecessary_wraps)]
const fn default_shutdown_timeout_secs() -> Option<u64> {
    Some(30)
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
            log_format: default_log_format(),
        }
    }
}

impl ServerConfig {
    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether logs should be emitted as JSON
    #[must_use]
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
