//! Logger module
//!
//! Logging for the SPA server:
//! - a timestamped request line for every incoming request
//! - server lifecycle and asset-root diagnostics at startup
//! - error and warning logging, optionally to files

pub mod writer;

use crate::config::Config;
use chrono::{SecondsFormat, Utc};
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// ISO-8601 timestamp for request lines
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Log one incoming request before dispatch: timestamp, method, URI
pub fn log_request(method: &hyper::Method, uri: &hyper::Uri) {
    write_info(&format!("{} - {} {}", timestamp(), method, uri));
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("SPA static server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

/// Log the asset-root diagnostics gathered at startup
pub fn log_asset_root(root: &Path, files: &[String], entry_document: &str, entry_present: bool) {
    write_info(&format!("Serving static files from: {}", root.display()));
    write_info(&format!("Files in static directory: {}", files.join(", ")));
    write_info(&format!("{entry_document} exists: {entry_present}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_shutdown() {
    write_info("\n[Shutdown] Stop signal received, no longer accepting connections");
}
