//! Request dispatch module
//!
//! Entry point for HTTP request processing: builds the request context,
//! dispatches it through the route table and writes the access log.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{HttpResponse, RequestContext};
use hyper::body::Body;
use hyper::Request;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// A request that matches no route is answered with 404.
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: Option<SocketAddr>,
) -> Result<HttpResponse, Infallible> {
    let started = Instant::now();
    let version = req.version();
    let mut ctx = request_context(&req, peer_addr);

    let (mut response, route) = match state.router.dispatch(&mut ctx) {
        Ok(dispatched) => (dispatched.response, Some(dispatched.pattern.to_string())),
        Err(_) => (http::build_404_response(), None),
    };
    http::apply_server_header(&mut response, &state.config.http.server_name);

    if state.access_log_enabled() {
        let mut entry = AccessLogEntry::from_context(&ctx, version);
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.route = route;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Copy the parts of a request a handler may look at
fn request_context<B>(req: &Request<B>, peer_addr: Option<SocketAddr>) -> RequestContext {
    let mut ctx = RequestContext::new(req.method().clone(), req.uri().path());
    ctx.query = req.uri().query().map(ToString::to_string);
    ctx.headers = req.headers().clone();
    ctx.remote_addr = peer_addr;
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::handler::register_demo_routes;
    use crate::routing::Router;
    use http_body_util::{BodyExt, Empty};
    use hyper::body::Bytes;

    fn state() -> Arc<AppState> {
        let mut cfg = Config::load_from("/nonexistent/pathmux-config").expect("defaults");
        cfg.logging.access_log = false;
        let mut router = Router::new();
        register_demo_routes(&mut router);
        router.get("/users/:id", |ctx: &RequestContext| {
            http::build_text_response(200, format!("user {}", ctx.param("id").unwrap_or("?")))
        });
        Arc::new(AppState::new(cfg, router))
    }

    fn request(method: &str, uri: &str) -> Request<Empty<Bytes>> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Empty::new())
            .expect("request")
    }

    async fn body_text(resp: HttpResponse) -> String {
        let bytes = resp.into_body().collect().await.expect("body").to_bytes();
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn test_demo_routes() {
        let state = state();

        let resp = handle_request(request("GET", "/"), Arc::clone(&state), None)
            .await
            .expect("infallible");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["server"], "pathmux");
        assert_eq!(body_text(resp).await, "welcome!\n");

        let resp = handle_request(request("GET", "/about"), state, None)
            .await
            .expect("infallible");
        assert_eq!(body_text(resp).await, "about\n");
    }

    #[tokio::test]
    async fn test_params_and_query() {
        let resp = handle_request(request("GET", "/users/42?verbose=1"), state(), None)
            .await
            .expect("infallible");
        assert_eq!(body_text(resp).await, "user 42");
    }

    #[tokio::test]
    async fn test_not_found() {
        let state = state();

        let resp = handle_request(request("DELETE", "/about"), Arc::clone(&state), None)
            .await
            .expect("infallible");
        assert_eq!(resp.status(), 404);

        let resp = handle_request(request("GET", "/about/"), state, None)
            .await
            .expect("infallible");
        assert_eq!(resp.status(), 404);
    }
}
