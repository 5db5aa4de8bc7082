//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Upstream Configuration ===
    /// URL of the activity suggestion endpoint.
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Per-call HTTP timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Idle connections kept per host.
    #[serde(default = "default_http_pool_size")]
    pub http_pool_size: usize,

    // === Export Configuration ===
    /// Directory for temporary export artifacts (OS temp dir when unset).
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    // === Observability ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    /// Enable the Prometheus metrics exporter.
    #[serde(default)]
    pub metrics_enabled: bool,

    /// Port for the Prometheus metrics exporter.
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
}

fn default_port() -> u16 {
    3000
}

fn default_upstream_url() -> String {
    "https://bored-api.appbrewery.com/random".to_string()
}

fn default_http_timeout_ms() -> u64 {
    10_000
}

fn default_http_pool_size() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_metrics_port() -> u16 {
    9090
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.upstream_url.is_empty() {
            return Err("UPSTREAM_URL must not be empty".to_string());
        }

        if !self.upstream_url.starts_with("http://") && !self.upstream_url.starts_with("https://") {
            return Err("UPSTREAM_URL must be an http(s) URL".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Directory where export artifacts are created.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            upstream_url: default_upstream_url(),
            http_timeout_ms: default_http_timeout_ms(),
            http_pool_size: default_http_pool_size(),
            export_dir: None,
            rust_log: default_log_level(),
            verbose: false,
            metrics_enabled: false,
            metrics_port: default_metrics_port(),
        }
    }
}
