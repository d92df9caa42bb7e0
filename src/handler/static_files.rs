//! Static file serving module
//!
//! Reads resolved files and the entry document off disk and turns them into
//! responses. Read failures after successful resolution are logged in full
//! server-side and surfaced to the client as a generic 500.

use crate::config::SiteState;
use crate::http::{mime, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a file the resolver has already located
pub async fn serve_resolved_file(
    file_path: &Path,
    request_path: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match fs::read(file_path).await {
        Ok(content) => {
            let content_type =
                mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
            response::build_file_response(content, content_type, is_head)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            response::build_error_response(request_path)
        }
    }
}

/// Serve the entry document for the root path and for SPA fallback routes.
///
/// Presence was probed once at startup; when the entry document was absent
/// then, every fallback answers 404 with a diagnostic body.
pub async fn serve_entry_document(state: &SiteState, is_head: bool) -> Response<Full<Bytes>> {
    let entry_name = &state.config.site.entry_document;
    if !state.entry_present {
        return response::build_not_found_response(&format!("{entry_name} not found"));
    }

    match fs::read(&state.entry_document).await {
        Ok(content) => response::build_entry_response(content, is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read entry document '{}': {e}",
                state.entry_document.display()
            ));
            response::build_error_response(entry_name)
        }
    }
}
