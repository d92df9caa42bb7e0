//! Asset resolution module
//!
//! Maps a request path onto the asset root and answers one question: is
//! there a regular file there? Traversal is rejected lexically before any
//! filesystem access, and the canonicalized target is bound-checked against
//! the asset root as a second barrier (this also catches symlink escapes).

use crate::logger;
use std::path::{Path, PathBuf};

/// Result of static resolution
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A regular file exists at the mapped path
    File(PathBuf),
    /// No such regular file; the path goes to the classifier
    Absent,
}

/// Resolve a request path against the (canonical) asset root.
///
/// Idempotent and side-effect free apart from filesystem metadata reads.
/// The root path `/` never reaches here; the dispatcher maps it to the
/// entry document directly.
pub fn resolve(asset_root: &Path, request_path: &str) -> Resolution {
    let Some(relative) = sanitize_request_path(request_path) else {
        logger::log_warning(&format!("Rejected unsafe request path: {request_path}"));
        return Resolution::Absent;
    };
    if relative.is_empty() {
        return Resolution::Absent;
    }

    let candidate = asset_root.join(relative);

    // Canonicalization fails for files that do not exist, which is the
    // common 404 case; only an in-root regular file resolves.
    let Ok(canonical) = candidate.canonicalize() else {
        return Resolution::Absent;
    };
    if !canonical.starts_with(asset_root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {request_path} -> {}",
            canonical.display()
        ));
        return Resolution::Absent;
    }

    if canonical.is_file() {
        Resolution::File(canonical)
    } else {
        Resolution::Absent
    }
}

/// Lexical sanitation, applied before touching the filesystem.
///
/// Strips leading slashes (so the join stays relative) and rejects NUL
/// bytes, backslashes, and any parent-directory segment outright.
fn sanitize_request_path(path: &str) -> Option<&str> {
    if path.contains('\0') || path.contains('\\') {
        return None;
    }
    let relative = path.trim_start_matches('/');
    if relative.split('/').any(|segment| segment == "..") {
        return None;
    }
    Some(relative)
}
