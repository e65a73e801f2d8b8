// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    /// Routes answered with a fixed response, registered at startup
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads (CPU cores when unset)
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Most verbose level written: error, warn, info or debug
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Upper bound on a connection's lifetime, in seconds (0 disables it)
    pub request_timeout: u64,
    pub max_connections: Option<u64>,
}

impl PerformanceConfig {
    /// Connection deadline, `None` when `request_timeout` is 0
    pub const fn connection_timeout(&self) -> Option<Duration> {
        match self.request_timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Value of the `Server` response header (empty to omit)
    pub server_name: String,
}

/// A route answered with a fixed response
///
/// The body is sent as-is; captured parameters are not substituted.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    #[serde(default = "default_route_method")]
    pub method: String,
    pub pattern: String,
    #[serde(default = "default_route_status")]
    pub status: u16,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_route_method() -> String {
    "GET".to_string()
}

const fn default_route_status() -> u16 {
    200
}
