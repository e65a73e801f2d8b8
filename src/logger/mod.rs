//! Logger module
//!
//! Provides logging utilities for the router server including:
//! - Server lifecycle logging
//! - Route table summary at startup
//! - Access logging with multiple formats
//! - Error and warning logging
//!
//! Lifecycle, warning and error lines are filtered by `logging.level`.
//! Access lines are controlled only by `logging.access_log`.

mod format;
mod level;
pub mod writer;

pub use format::AccessLogEntry;
pub use level::Level;

use crate::config::Config;
use crate::routing::Router;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup. Before that, output goes
/// to stdout/stderr.
pub fn init(config: &Config) -> std::io::Result<()> {
    let level = config
        .logging
        .level
        .parse::<Level>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    writer::init(
        level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Before `init()`, everything up to `info` is written
fn enabled(level: Level) -> bool {
    writer::get().map_or(level <= Level::Info, |w| w.enabled(level))
}

fn write_info_at(level: Level, message: &str) {
    if !enabled(level) {
        return;
    }
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_info(message: &str) {
    write_info_at(Level::Info, message);
}

fn write_error_at(level: Level, message: &str) {
    if !enabled(level) {
        return;
    }
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("pathmux started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(max) = config.performance.max_connections {
        write_info(&format!("Max connections: {max}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

/// Log every registered route, sorted for stable output
pub fn log_routes(router: &Router) {
    let mut routes: Vec<_> = router.routes().collect();
    routes.sort_unstable();
    write_info(&format!("[Routes] {} registered", routes.len()));
    for (method, pattern) in routes {
        write_info(&format!("  - {method:<7} {pattern}"));
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info_at(Level::Debug, &format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error_at(Level::Error, &format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error_at(Level::Error, &format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error_at(Level::Warn, &format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_shutdown() {
    write_info("[Shutdown] Listener closed, no longer accepting connections");
}
