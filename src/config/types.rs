// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Site configuration: the asset directory and the routing policy inputs.
///
/// The client-route allow-list and the asset-shape heuristics are explicit
/// configuration, never inferred from the request stream.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory holding the built SPA (entry document plus hashed assets)
    pub asset_root: String,
    /// The HTML document bootstrapping the client application
    pub entry_document: String,
    /// Reserved backend namespace; requests under it are always refused
    pub api_prefix: String,
    /// Paths the client application owns; they fall back to the entry document
    pub client_routes: Vec<String>,
    /// Final-segment extensions that mark a path as a static asset
    pub asset_extensions: Vec<String>,
    /// Path segments that mark a path as a static asset (e.g. "assets")
    pub asset_path_segments: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub max_connections: Option<u64>,
}
