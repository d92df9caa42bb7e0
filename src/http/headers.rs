//! Fixed response header module
//!
//! The header set applied to every response: permissive CORS, a CSP that
//! permits the bundle's inline/eval scripts, and frame embedding from
//! anywhere. Fixed, never content-negotiated.

use hyper::header::{HeaderName, HeaderValue};
use hyper::HeaderMap;

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str =
    "Origin, X-Requested-With, Content-Type, Accept, Authorization";
const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self' 'unsafe-inline' 'unsafe-eval'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; connect-src 'self'; frame-ancestors *";

/// Stamp the fixed header set onto a response.
///
/// Applied by the router to every outgoing response, preflight and error
/// responses included.
pub fn apply_standard_headers(headers: &mut HeaderMap) {
    insert_static(headers, "access-control-allow-origin", "*");
    insert_static(headers, "access-control-allow-methods", ALLOWED_METHODS);
    insert_static(headers, "access-control-allow-headers", ALLOWED_HEADERS);
    insert_static(headers, "content-security-policy", CONTENT_SECURITY_POLICY);
    insert_static(headers, "x-frame-options", "ALLOWALL");
    insert_static(headers, "x-content-type-options", "nosniff");
}

fn insert_static(headers: &mut HeaderMap, name: &'static str, value: &'static str) {
    headers.insert(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_set_applied() {
        let mut headers = HeaderMap::new();
        apply_standard_headers(&mut headers);

        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(
            headers.get("access-control-allow-methods").unwrap(),
            ALLOWED_METHODS
        );
        assert_eq!(
            headers.get("access-control-allow-headers").unwrap(),
            ALLOWED_HEADERS
        );
        assert_eq!(headers.get("x-frame-options").unwrap(), "ALLOWALL");
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert!(headers
            .get("content-security-policy")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("frame-ancestors *"));
    }

    #[test]
    fn test_reapplication_is_idempotent() {
        let mut headers = HeaderMap::new();
        apply_standard_headers(&mut headers);
        apply_standard_headers(&mut headers);
        assert_eq!(
            headers
                .get_all("access-control-allow-origin")
                .iter()
                .count(),
            1
        );
    }
}
