//! Route classification module
//!
//! Decides what a request path that did not resolve to a file actually is:
//! an unimplemented API call, a missing build artifact, a client-side route
//! that falls back to the entry document, or a genuine 404. The checks are
//! an ordered rule chain; the first matching rule wins.
//!
//! There is no catch-all fallback to the entry document: paths outside the
//! allow-list stay visible as 404s instead of silent 200s.

use crate::config::SiteConfig;
use std::collections::HashSet;

/// Verdict for a path with no matching file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Path is inside the reserved API namespace; this server implements none of it
    ApiUnimplemented,
    /// Path is shaped like a static asset but the file does not exist
    AssetMissing,
    /// Path is a registered client route; serve the entry document
    SpaFallback,
    /// Anything else
    NotFound,
}

/// Routing policy snapshot, precomputed once at startup
#[derive(Debug)]
pub struct RoutePolicy {
    api_prefix: String,
    asset_extensions: Vec<String>,
    asset_path_segments: Vec<String>,
    client_routes: HashSet<String>,
}

/// Classification rules in decision order. Several predicates can overlap
/// (`/api/client.js`, an `/assets/` path listed as a client route), so the
/// order is part of the contract.
const RULES: &[(fn(&RoutePolicy, &str) -> bool, Disposition)] = &[
    (RoutePolicy::is_api_request, Disposition::ApiUnimplemented),
    (RoutePolicy::is_asset_shaped, Disposition::AssetMissing),
    (RoutePolicy::is_client_route, Disposition::SpaFallback),
];

/// Classify a non-root request path that did not resolve to a file
pub fn classify(policy: &RoutePolicy, path: &str) -> Disposition {
    RULES
        .iter()
        .find(|(predicate, _)| predicate(policy, path))
        .map_or(Disposition::NotFound, |&(_, disposition)| disposition)
}

impl RoutePolicy {
    /// Build the policy from site configuration, normalizing extensions to
    /// lowercase without leading dots.
    pub fn from_site(site: &SiteConfig) -> Self {
        Self {
            api_prefix: site.api_prefix.clone(),
            asset_extensions: site
                .asset_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            asset_path_segments: site.asset_path_segments.clone(),
            client_routes: site.client_routes.iter().cloned().collect(),
        }
    }

    /// Path is inside the reserved API namespace
    pub fn is_api_request(&self, path: &str) -> bool {
        path.starts_with(&self.api_prefix)
    }

    /// Path looks like a static asset: known extension on the final segment,
    /// or any segment registered as an asset directory
    pub fn is_asset_shaped(&self, path: &str) -> bool {
        self.has_asset_extension(path) || self.has_asset_segment(path)
    }

    /// Path is an exact member of the client-route allow-list
    pub fn is_client_route(&self, path: &str) -> bool {
        self.client_routes.contains(path)
    }

    fn has_asset_extension(&self, path: &str) -> bool {
        let final_segment = path.rsplit('/').next().unwrap_or(path);
        let Some((stem, extension)) = final_segment.rsplit_once('.') else {
            return false;
        };
        // A bare ".dotfile" has no stem and is not asset-shaped
        !stem.is_empty()
            && self
                .asset_extensions
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
    }

    fn has_asset_segment(&self, path: &str) -> bool {
        path.split('/')
            .any(|segment| self.asset_path_segments.iter().any(|known| known == segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn make_policy() -> RoutePolicy {
        RoutePolicy::from_site(&SiteConfig {
            asset_root: "dist/public".to_string(),
            entry_document: "index.html".to_string(),
            api_prefix: "/api/".to_string(),
            client_routes: vec![
                "/offline".to_string(),
                "/notes".to_string(),
                "/settings".to_string(),
                "/bioneural-beats".to_string(),
            ],
            asset_extensions: vec!["css".to_string(), "js".to_string(), "svg".to_string()],
            asset_path_segments: vec!["assets".to_string(), "static".to_string()],
        })
    }

    #[test]
    fn test_api_predicate() {
        let policy = make_policy();
        assert!(policy.is_api_request("/api/settings"));
        assert!(policy.is_api_request("/api/reminders/today"));
        assert!(!policy.is_api_request("/apiary"));
        assert!(!policy.is_api_request("/settings"));
    }

    #[test]
    fn test_asset_extension_predicate() {
        let policy = make_policy();
        assert!(policy.is_asset_shaped("/main.css"));
        assert!(policy.is_asset_shaped("/deep/nested/chunk.js"));
        assert!(policy.is_asset_shaped("/LOGO.SVG"));
        assert!(!policy.is_asset_shaped("/readme.txt"));
        assert!(!policy.is_asset_shaped("/settings"));
        // dotfile without a stem is not asset-shaped
        assert!(!policy.is_asset_shaped("/.js"));
    }

    #[test]
    fn test_asset_segment_predicate() {
        let policy = make_policy();
        assert!(policy.is_asset_shaped("/assets/whatever"));
        assert!(policy.is_asset_shaped("/static/img/logo"));
        assert!(!policy.is_asset_shaped("/assetsandmore/file"));
    }

    #[test]
    fn test_client_route_predicate_is_exact() {
        let policy = make_policy();
        assert!(policy.is_client_route("/settings"));
        assert!(policy.is_client_route("/bioneural-beats"));
        assert!(!policy.is_client_route("/settings/"));
        assert!(!policy.is_client_route("/settings/audio"));
    }

    #[test]
    fn test_classify_order_api_beats_asset() {
        let policy = make_policy();
        // Both rules 1 and 2 match; rule 1 wins
        assert_eq!(
            classify(&policy, "/api/client.js"),
            Disposition::ApiUnimplemented
        );
    }

    #[test]
    fn test_classify_order_asset_beats_route() {
        let policy = make_policy();
        // An allow-listed path inside an asset directory still reports the
        // missing artifact instead of silently serving HTML
        assert_eq!(
            classify(&policy, "/assets/settings"),
            Disposition::AssetMissing
        );
    }

    #[test]
    fn test_classify_table() {
        let policy = make_policy();
        assert_eq!(
            classify(&policy, "/api/settings"),
            Disposition::ApiUnimplemented
        );
        assert_eq!(
            classify(&policy, "/assets/index-D3h2Kx.js"),
            Disposition::AssetMissing
        );
        assert_eq!(classify(&policy, "/settings"), Disposition::SpaFallback);
        assert_eq!(classify(&policy, "/unknown/path"), Disposition::NotFound);
    }
}
