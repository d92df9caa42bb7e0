//! HTTP response building module
//!
//! Builders for every terminal response the dispatcher can emit. Content
//! responses carry `max-age=0` and no validators; clients revalidate on
//! every request.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Cache posture for all content responses: always revalidate
const CACHE_CONTROL: &str = "max-age=0";

/// Build 404 Not Found response with a descriptive text body
pub fn build_not_found_response(body: &str) -> Response<Full<Bytes>> {
    let body = body.to_owned();
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body.clone())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_method_not_allowed_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build the CORS preflight response: 200 with an empty body.
///
/// The shared header set (CORS, CSP, frame options) is stamped on by the
/// router after dispatch, like every other response.
pub fn build_preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 response for a file that resolved but could not be read.
///
/// The body names only the request path; the underlying I/O error stays in
/// the server log.
pub fn build_error_response(request_path: &str) -> Response<Full<Bytes>> {
    let body = format!("Error serving {request_path}");
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body.clone())))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build 200 response for resolved file content
pub fn build_file_response(
    data: Vec<u8>,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Cache-Control", CACHE_CONTROL)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response carrying the entry document
pub fn build_entry_response(data: Vec<u8>, is_head: bool) -> Response<Full<Bytes>> {
    build_file_response(data, "text/html; charset=utf-8", is_head)
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
