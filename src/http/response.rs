//! HTTP response building module
//!
//! Builders never panic: a builder error is logged and replaced with a
//! fallback response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE, SERVER};
use hyper::{Response, StatusCode};

use crate::routing::HttpResponse;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Build 404 Not Found response
pub fn build_404_response() -> HttpResponse {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(CONTENT_TYPE, TEXT_PLAIN)
        .body(Full::new(Bytes::from("404 page not found\n")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            fallback_response(StatusCode::NOT_FOUND)
        })
}

/// Build plain text response
pub fn build_text_response(status: u16, body: impl Into<Bytes>) -> HttpResponse {
    build_direct_response(status, Some(body.into()), None)
}

/// Build response with a fixed body
///
/// Content type defaults to plain text when a body is given.
pub fn build_direct_response(
    status: u16,
    body: Option<Bytes>,
    content_type: Option<&str>,
) -> HttpResponse {
    let body = body.unwrap_or_default();
    let mut builder = Response::builder()
        .status(status)
        .header(CONTENT_LENGTH, body.len());

    if !body.is_empty() || content_type.is_some() {
        builder = builder.header(CONTENT_TYPE, content_type.unwrap_or(TEXT_PLAIN));
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error(&status.to_string(), &e);
        fallback_response(StatusCode::INTERNAL_SERVER_ERROR)
    })
}

/// Stamp the `Server` header onto an outgoing response
///
/// Names that are not valid header values are skipped.
pub fn apply_server_header(resp: &mut HttpResponse, server_name: &str) {
    if server_name.is_empty() {
        return;
    }
    if let Ok(value) = HeaderValue::from_str(server_name) {
        resp.headers_mut().insert(SERVER, value);
    }
}

fn fallback_response(status: StatusCode) -> HttpResponse {
    let mut resp = Response::new(Full::new(Bytes::new()));
    *resp.status_mut() = status;
    resp
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
