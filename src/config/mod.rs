// Configuration module entry point
// Loads layered configuration and holds the shared server state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, PerformanceConfig, RouteConfig, ServerConfig,
};

/// Default config file name (extension detected by the `config` crate)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from `config.toml` (or another supported extension)
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path
    ///
    /// The file is optional. Environment variables such as
    /// `PATHMUX_SERVER__PORT=9000` override file values.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("PATHMUX")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.request_timeout", 30)?
            .set_default("http.server_name", "pathmux")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Environment variables are process-wide; tests that load config hold this
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("pathmux-{}-{name}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write temp config");
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let _env = env_guard();
        let cfg = Config::load_from("/nonexistent/pathmux-config").expect("defaults");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.logging.access_log_file.is_none());
        assert!(cfg.performance.keep_alive);
        assert_eq!(cfg.performance.request_timeout, 30);
        assert_eq!(cfg.http.server_name, "pathmux");
        assert!(cfg.routes.is_empty());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let _env = env_guard();
        let path = write_temp_config(
            "override",
            r#"
            [server]
            port = 9090
            workers = 2

            [logging]
            access_log_format = "json"

            [[routes]]
            method = "POST"
            pattern = "/echo/:word"
            status = 202
            "#,
        );

        let cfg = Config::load_from(path.to_str().expect("utf-8 path")).expect("config");
        std::fs::remove_file(&path).ok();

        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.logging.access_log_format, "json");
        assert_eq!(cfg.routes.len(), 1);
        assert_eq!(cfg.routes[0].pattern, "/echo/:word");
        assert_eq!(cfg.routes[0].status, 202);
    }

    #[test]
    fn test_socket_addr() {
        let _env = env_guard();
        let mut cfg = Config::load_from("/nonexistent/pathmux-config").expect("defaults");
        assert_eq!(
            cfg.get_socket_addr().expect("addr"),
            "0.0.0.0:8080".parse().expect("literal addr")
        );

        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let _env = env_guard();
        let path = write_temp_config(
            "env",
            r#"
            [server]
            port = 9090

            [performance]
            keep_alive = true
            "#,
        );

        std::env::set_var("PATHMUX_SERVER__PORT", "9191");
        std::env::set_var("PATHMUX_PERFORMANCE__KEEP_ALIVE", "false");
        let loaded = Config::load_from(path.to_str().expect("utf-8 path"));
        std::env::remove_var("PATHMUX_SERVER__PORT");
        std::env::remove_var("PATHMUX_PERFORMANCE__KEEP_ALIVE");
        std::fs::remove_file(&path).ok();

        let cfg = loaded.expect("config");
        assert_eq!(cfg.server.port, 9191);
        assert!(!cfg.performance.keep_alive);
        assert_eq!(cfg.server.host, "0.0.0.0");
    }
}
