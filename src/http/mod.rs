//! HTTP protocol layer module
//!
//! Protocol-level building blocks shared by the request handlers: MIME
//! detection, response builders, and the fixed header set stamped on every
//! response.

pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_error_response, build_method_not_allowed_response, build_not_found_response,
    build_preflight_response,
};
