// Site state module
// The immutable per-process snapshot every request handler reads

use std::io;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::handler::classifier::RoutePolicy;
use crate::logger;

/// Process-wide site state, built once before the listener starts accepting
/// and shared read-only across all request tasks. Nothing here changes for
/// the lifetime of the process, so request handling needs no locking.
pub struct SiteState {
    pub config: Config,
    /// Canonicalized asset root; all resolution is relative to it
    pub asset_root: PathBuf,
    /// Full path of the entry document inside the asset root
    pub entry_document: PathBuf,
    /// Entry-document presence, probed once at startup
    pub entry_present: bool,
    /// Precomputed route classification policy
    pub policy: RoutePolicy,
}

impl SiteState {
    /// Build the site state: canonicalize the asset root, list it once for
    /// diagnostics, and probe the entry document.
    ///
    /// A missing or unreadable asset root is fatal; a missing entry document
    /// is logged and surfaced per-request as 404.
    pub fn initialize(config: &Config) -> io::Result<Self> {
        let asset_root = Path::new(&config.site.asset_root).canonicalize()?;
        let files = list_directory(&asset_root)?;

        let entry_document = asset_root.join(&config.site.entry_document);
        let entry_present = entry_document.is_file();

        logger::log_asset_root(&asset_root, &files, &config.site.entry_document, entry_present);
        if !entry_present {
            logger::log_warning(&format!(
                "Entry document '{}' is missing; client routes will 404 until it is deployed",
                config.site.entry_document
            ));
        }

        Ok(Self {
            config: config.clone(),
            asset_root,
            entry_document,
            entry_present,
            policy: RoutePolicy::from_site(&config.site),
        })
    }
}

/// Top-level listing of the asset root, logged once at startup
fn list_directory(root: &Path) -> io::Result<Vec<String>> {
    let mut files: Vec<String> = std::fs::read_dir(root)?
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_config(asset_root: &Path) -> Config {
        let mut config = Config::load_from("nonexistent_config_file").unwrap();
        config.site.asset_root = asset_root.display().to_string();
        config
    }

    fn fixture_dir(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("spa_server_site_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        root
    }

    #[test]
    fn test_initialize_probes_entry_document() {
        let root = fixture_dir("entry");
        fs::write(root.join("index.html"), "<html></html>").unwrap();

        let state = SiteState::initialize(&fixture_config(&root)).unwrap();
        assert!(state.entry_present);
        assert!(state.entry_document.ends_with("index.html"));
        assert!(state.asset_root.is_absolute());
    }

    #[test]
    fn test_initialize_without_entry_document() {
        let root = fixture_dir("no_entry");
        let state = SiteState::initialize(&fixture_config(&root)).unwrap();
        assert!(!state.entry_present);
    }

    #[test]
    fn test_missing_asset_root_is_fatal() {
        let root = fixture_dir("fatal").join("does_not_exist");
        assert!(SiteState::initialize(&fixture_config(&root)).is_err());
    }
}
