//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Every request is logged, then
//! dispatched to exactly one terminal response: direct static resolution
//! first, and on a miss the classifier's verdict picks the outcome. The
//! fixed header set is stamped on after dispatch so no branch can skip it.

use crate::config::SiteState;
use crate::handler::classifier::{self, Disposition};
use crate::handler::resolver::{self, Resolution};
use crate::handler::static_files;
use crate::http::{self, headers};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Fixed body for requests into the reserved API namespace
const API_NOT_IMPLEMENTED: &str = "API not implemented";

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<SiteState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let uri = req.uri().clone();

    if state.config.logging.access_log {
        logger::log_request(&method, &uri);
    }

    let is_head = method == Method::HEAD;
    let mut response = dispatch(&method, uri.path(), is_head, &state).await;
    headers::apply_standard_headers(response.headers_mut());

    Ok(response)
}

/// Produce the single terminal response for one request.
///
/// Decision order: CORS preflight, method gate (the API namespace is refused
/// for every method), root path, direct static resolution, classification.
async fn dispatch(
    method: &Method,
    path: &str,
    is_head: bool,
    state: &SiteState,
) -> Response<Full<Bytes>> {
    // CORS preflight short-circuits before any routing
    if *method == Method::OPTIONS {
        return http::build_preflight_response();
    }

    if *method != Method::GET && *method != Method::HEAD {
        // The API namespace answers its fixed 404 regardless of method
        if state.policy.is_api_request(path) {
            return http::build_not_found_response(API_NOT_IMPLEMENTED);
        }
        logger::log_warning(&format!("Method not allowed: {method} {path}"));
        return http::build_method_not_allowed_response();
    }

    // The root path always maps to the entry document, bypassing resolution
    if path == "/" {
        return static_files::serve_entry_document(state, is_head).await;
    }

    match resolver::resolve(&state.asset_root, path) {
        Resolution::File(file_path) => {
            static_files::serve_resolved_file(&file_path, path, is_head).await
        }
        Resolution::Absent => match classifier::classify(&state.policy, path) {
            Disposition::ApiUnimplemented => http::build_not_found_response(API_NOT_IMPLEMENTED),
            Disposition::SpaFallback => static_files::serve_entry_document(state, is_head).await,
            Disposition::AssetMissing | Disposition::NotFound => {
                http::build_not_found_response(&format!("Resource not found: {path}"))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, SiteState};
    use http_body_util::BodyExt;
    use std::fs;
    use std::path::{Path, PathBuf};

    const ENTRY_HTML: &str = "<!DOCTYPE html><html><body>app shell</body></html>";

    fn fixture_dir(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "spa_server_router_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("assets/index-AbC123.js"), "export {}").unwrap();
        fs::write(root.join("manifest.json"), "{}").unwrap();
        root
    }

    fn fixture_state(root: &Path, with_entry: bool) -> SiteState {
        if with_entry {
            fs::write(root.join("index.html"), ENTRY_HTML).unwrap();
        }
        let mut config = Config::load_from("nonexistent_config_file").unwrap();
        config.site.asset_root = root.display().to_string();
        SiteState::initialize(&config).unwrap()
    }

    async fn body_text(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_serves_entry_document() {
        let root = fixture_dir("root");
        let state = fixture_state(&root, true);

        let response = dispatch(&Method::GET, "/", false, &state).await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(body_text(response).await, ENTRY_HTML);
    }

    #[tokio::test]
    async fn test_root_without_entry_document() {
        let root = fixture_dir("root_absent");
        let state = fixture_state(&root, false);

        let response = dispatch(&Method::GET, "/", false, &state).await;
        assert_eq!(response.status(), 404);
        assert_eq!(body_text(response).await, "index.html not found");
    }

    #[tokio::test]
    async fn test_api_namespace_is_unimplemented() {
        let root = fixture_dir("api");
        let state = fixture_state(&root, true);

        for method in [Method::GET, Method::POST, Method::DELETE] {
            let response = dispatch(&method, "/api/settings", false, &state).await;
            assert_eq!(response.status(), 404, "method {method}");
            assert_eq!(body_text(response).await, "API not implemented");
        }
    }

    #[tokio::test]
    async fn test_existing_asset_served_byte_exact() {
        let root = fixture_dir("asset");
        let state = fixture_state(&root, true);

        let response = dispatch(&Method::GET, "/assets/index-AbC123.js", false, &state).await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/javascript"
        );
        assert_eq!(body_text(response).await, "export {}");
    }

    #[tokio::test]
    async fn test_missing_asset_never_falls_back() {
        let root = fixture_dir("asset_missing");
        let state = fixture_state(&root, true);

        let response = dispatch(&Method::GET, "/assets/index-Gone99.js", false, &state).await;
        assert_eq!(response.status(), 404);
        let body = body_text(response).await;
        assert_eq!(body, "Resource not found: /assets/index-Gone99.js");
        assert!(!body.contains("app shell"));
    }

    #[tokio::test]
    async fn test_client_route_falls_back_to_entry() {
        let root = fixture_dir("spa");
        let state = fixture_state(&root, true);

        let response = dispatch(&Method::GET, "/settings", false, &state).await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(body_text(response).await, ENTRY_HTML);
    }

    #[tokio::test]
    async fn test_client_route_without_entry_document() {
        let root = fixture_dir("spa_absent");
        let state = fixture_state(&root, false);

        let response = dispatch(&Method::GET, "/settings", false, &state).await;
        assert_eq!(response.status(), 404);
        assert_eq!(body_text(response).await, "index.html not found");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let root = fixture_dir("unknown");
        let state = fixture_state(&root, true);

        let response = dispatch(&Method::GET, "/unknown/path", false, &state).await;
        assert_eq!(response.status(), 404);
        assert_eq!(body_text(response).await, "Resource not found: /unknown/path");
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let root = fixture_dir("options");
        let state = fixture_state(&root, true);

        let response = dispatch(&Method::OPTIONS, "/anything", false, &state).await;
        assert_eq!(response.status(), 200);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_non_get_outside_api_is_405() {
        let root = fixture_dir("method");
        let state = fixture_state(&root, true);

        let response = dispatch(&Method::POST, "/settings", false, &state).await;
        assert_eq!(response.status(), 405);
    }

    #[tokio::test]
    async fn test_head_has_empty_body_and_headers() {
        let root = fixture_dir("head");
        let state = fixture_state(&root, true);

        let response = dispatch(&Method::HEAD, "/manifest.json", true, &state).await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Length").unwrap(), "2");
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_traversal_stays_inside_root() {
        let root = fixture_dir("traversal");
        let state = fixture_state(&root, true);
        let secret = root.parent().unwrap().join("router_secret.txt");
        fs::write(&secret, "top secret").unwrap();

        let response = dispatch(&Method::GET, "/../router_secret.txt", false, &state).await;
        assert_eq!(response.status(), 404);
        assert!(!body_text(response).await.contains("top secret"));
        let _ = fs::remove_file(secret);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical() {
        let root = fixture_dir("idempotent");
        let state = fixture_state(&root, true);

        let first = dispatch(&Method::GET, "/manifest.json", false, &state).await;
        let second = dispatch(&Method::GET, "/manifest.json", false, &state).await;
        assert_eq!(first.status(), second.status());
        assert_eq!(
            first.headers().get("Cache-Control").unwrap(),
            "max-age=0"
        );
        assert_eq!(body_text(first).await, body_text(second).await);
    }
}
