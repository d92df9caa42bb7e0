// Configuration module entry point
// Manages configuration loading and the immutable per-process site state

mod site;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use site::SiteState;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig, SiteConfig};

impl Config {
    /// Load configuration and apply the port override.
    ///
    /// Port resolution order matches the deployment scripts: first CLI
    /// argument, else the `PORT` environment variable, else the configured
    /// (or default) port.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut cfg = Self::load_from("config")?;
        if let Some(port) = port_override() {
            cfg.server.port = port;
        }
        Ok(cfg)
    }

    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5001)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("site.asset_root", "dist/public")?
            .set_default("site.entry_document", "index.html")?
            .set_default("site.api_prefix", "/api/")?
            .set_default(
                "site.client_routes",
                vec!["/offline", "/notes", "/settings", "/bioneural-beats"],
            )?
            .set_default(
                "site.asset_extensions",
                vec![
                    "css", "js", "mjs", "map", "json", "png", "jpg", "jpeg", "gif", "svg",
                    "ico", "webp", "woff", "woff2",
                ],
            )?
            .set_default("site.asset_path_segments", vec!["assets", "static"])?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Port from the first CLI argument, else the `PORT` environment variable
fn port_override() -> Option<u16> {
    let raw = std::env::args().nth(1).or_else(|| std::env::var("PORT").ok())?;
    match raw.parse() {
        Ok(port) => Some(port),
        Err(_) => {
            crate::logger::log_warning(&format!("Ignoring unparsable port override: '{raw}'"));
            None
        }
    }
}
