//! Built-in and config-declared routes

use crate::config::RouteConfig;
use crate::http;
use crate::routing::{HttpResponse, RequestContext, Router};
use hyper::body::Bytes;

/// Register the demo pages: `GET /` and `GET /about`
pub fn register_demo_routes(router: &mut Router) {
    router.get("/", welcome);
    router.get("/about", about);
}

fn welcome(_: &RequestContext) -> HttpResponse {
    http::build_text_response(200, "welcome!\n")
}

fn about(_: &RequestContext) -> HttpResponse {
    http::build_text_response(200, "about\n")
}

/// Register each configured route as a fixed-response handler
///
/// Later entries replace earlier ones (and built-in routes) with the same
/// method and pattern.
pub fn register_config_routes(router: &mut Router, routes: &[RouteConfig]) {
    for route in routes {
        let status = route.status;
        let body = route.body.clone().map(Bytes::from);
        let content_type = route.content_type.clone();
        router.register(&route.method, route.pattern.clone(), move |_: &RequestContext| {
            http::build_direct_response(status, body.clone(), content_type.as_deref())
        });
    }
}
