//! Handler capability and the request context it receives

use std::net::SocketAddr;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{HeaderMap, Method, Response};

use super::matcher::Params;

/// Response type produced by every handler
pub type HttpResponse = Response<Full<Bytes>>;

/// Request information handed to a handler
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub remote_addr: Option<SocketAddr>,
    /// Captures from the matched pattern, filled in by dispatch
    pub params: Params,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Self::default()
        }
    }

    /// Value captured for `:name` in the matched pattern
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Header value, if present and valid ASCII
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A registered route target
///
/// Any `Fn(&RequestContext) -> HttpResponse` closure is a handler.
pub trait Handler: Send + Sync {
    fn call(&self, ctx: &RequestContext) -> HttpResponse;
}

impl<F> Handler for F
where
    F: Fn(&RequestContext) -> HttpResponse + Send + Sync,
{
    fn call(&self, ctx: &RequestContext) -> HttpResponse {
        self(ctx)
    }
}
