//! Route table
//!
//! Handlers are stored per method, then per pattern. Registration happens
//! through `&mut self` before the table is shared, so dispatch only ever
//! reads it.

use std::collections::HashMap;
use std::fmt;

use super::handler::{Handler, HttpResponse, RequestContext};
use super::matcher::{match_pattern, Params};

/// No registered pattern matched the request
///
/// Covers both an unknown method and a known method with no matching path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no route matched")
    }
}

impl std::error::Error for NotFound {}

/// Route found by [`Router::lookup`]
pub struct RouteMatch<'a> {
    pub pattern: &'a str,
    pub handler: &'a dyn Handler,
    pub params: Params,
}

/// Result of a successful [`Router::dispatch`]
#[derive(Debug)]
pub struct Dispatched<'a> {
    /// Pattern whose handler ran
    pub pattern: &'a str,
    pub response: HttpResponse,
}

/// Method + path router
#[derive(Default)]
pub struct Router {
    routes: HashMap<String, HashMap<String, Box<dyn Handler>>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handler` under `(method, pattern)`
    ///
    /// Methods are compared exactly, so `get` and `GET` are different keys.
    /// Registering the same pair again replaces the earlier handler.
    pub fn register<H>(&mut self, method: impl AsRef<str>, pattern: impl Into<String>, handler: H)
    where
        H: Handler + 'static,
    {
        self.routes
            .entry(method.as_ref().to_string())
            .or_default()
            .insert(pattern.into(), Box::new(handler));
    }

    /// Shorthand for `register("GET", ..)`
    pub fn get<H>(&mut self, pattern: impl Into<String>, handler: H)
    where
        H: Handler + 'static,
    {
        self.register("GET", pattern, handler);
    }

    /// Shorthand for `register("POST", ..)`
    pub fn post<H>(&mut self, pattern: impl Into<String>, handler: H)
    where
        H: Handler + 'static,
    {
        self.register("POST", pattern, handler);
    }

    /// Find the first pattern registered for `method` that matches `path`
    ///
    /// Patterns are scanned in `HashMap` order, which is unspecified. When
    /// several patterns match the same path, any one of them may be returned.
    pub fn lookup(&self, method: &str, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.get(method)?.iter().find_map(|(pattern, handler)| {
            match_pattern(pattern, path).map(|params| RouteMatch {
                pattern,
                handler: handler.as_ref(),
                params,
            })
        })
    }

    /// Run the handler for the request described by `ctx`
    ///
    /// Captured parameters are written to `ctx.params` before the handler
    /// is called. Exactly one handler runs, or none and `NotFound` is
    /// returned.
    pub fn dispatch(&self, ctx: &mut RequestContext) -> Result<Dispatched<'_>, NotFound> {
        let route = self
            .lookup(ctx.method.as_str(), &ctx.path)
            .ok_or(NotFound)?;
        ctx.params = route.params;
        Ok(Dispatched {
            pattern: route.pattern,
            response: route.handler.call(ctx),
        })
    }

    /// All registered `(method, pattern)` pairs, in no particular order
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().flat_map(|(method, patterns)| {
            patterns
                .keys()
                .map(move |pattern| (method.as_str(), pattern.as_str()))
        })
    }

    /// Number of registered `(method, pattern)` pairs
    pub fn len(&self) -> usize {
        self.routes.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.routes()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;
    use hyper::body::Bytes;
    use hyper::{Method, Response};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Handler that answers with an `x-handler` header naming itself
    fn tagged(tag: &'static str) -> impl Handler {
        move |_: &RequestContext| {
            Response::builder()
                .header("x-handler", tag)
                .body(Full::new(Bytes::new()))
                .expect("response")
        }
    }

    fn counting(counter: Arc<AtomicUsize>) -> impl Handler {
        move |_: &RequestContext| {
            counter.fetch_add(1, Ordering::SeqCst);
            Response::new(Full::new(Bytes::new()))
        }
    }

    fn tag_of(dispatched: &Dispatched<'_>) -> String {
        dispatched.response.headers()["x-handler"]
            .to_str()
            .expect("ascii")
            .to_string()
    }

    fn request(method: &str, path: &str) -> RequestContext {
        RequestContext::new(
            Method::from_bytes(method.as_bytes()).expect("method"),
            path,
        )
    }

    #[test]
    fn test_dispatch_static_route() {
        let mut router = Router::new();
        router.get("/about", tagged("about"));

        let mut ctx = request("GET", "/about");
        let dispatched = router.dispatch(&mut ctx).expect("route");
        assert_eq!(dispatched.pattern, "/about");
        assert_eq!(tag_of(&dispatched), "about");
        assert!(ctx.params.is_empty());
    }

    #[test]
    fn test_reregistering_overwrites() {
        let mut router = Router::new();
        router.get("/about", tagged("h1"));
        router.get("/about", tagged("h2"));

        assert_eq!(router.len(), 1);
        let mut ctx = request("GET", "/about");
        let dispatched = router.dispatch(&mut ctx).expect("route");
        assert_eq!(tag_of(&dispatched), "h2");
    }

    #[test]
    fn test_unregistered_method_not_found() {
        let mut router = Router::new();
        router.get("/about", tagged("get"));
        router.post("/about", tagged("post"));

        let mut ctx = request("DELETE", "/about");
        assert_eq!(router.dispatch(&mut ctx).err(), Some(NotFound));
    }

    #[test]
    fn test_unmatched_path_not_found() {
        let mut router = Router::new();
        router.get("/users/:id", tagged("user"));

        let mut ctx = request("GET", "/users/1/posts");
        assert_eq!(router.dispatch(&mut ctx).err(), Some(NotFound));
    }

    #[test]
    fn test_repeated_miss_has_no_side_effects() {
        let mut router = Router::new();
        router.get("/", tagged("root"));

        for _ in 0..3 {
            let mut ctx = request("PATCH", "/");
            assert_eq!(router.dispatch(&mut ctx).err(), Some(NotFound));
        }
        assert_eq!(router.len(), 1);
        assert!(router.lookup("PATCH", "/").is_none());
    }

    #[test]
    fn test_method_is_case_sensitive() {
        let mut router = Router::new();
        router.get("/", tagged("root"));

        assert!(router.lookup("get", "/").is_none());
        assert!(router.lookup("GET", "/").is_some());
    }

    #[test]
    fn test_params_reach_handler() {
        let mut router = Router::new();
        router.get("/users/:id", |ctx: &RequestContext| {
            Response::builder()
                .header("x-user", ctx.param("id").unwrap_or("none"))
                .body(Full::new(Bytes::new()))
                .expect("response")
        });

        let mut ctx = request("GET", "/users/42");
        let dispatched = router.dispatch(&mut ctx).expect("route");
        assert_eq!(dispatched.response.headers()["x-user"], "42");
        assert_eq!(ctx.param("id"), Some("42"));
    }

    #[test]
    fn test_exactly_one_handler_runs() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut router = Router::new();
        router.get("/users/me", counting(Arc::clone(&first)));
        router.get("/users/:id", counting(Arc::clone(&second)));

        let mut ctx = request("GET", "/users/me");
        router.dispatch(&mut ctx).expect("route");

        // Either pattern may win, but only one runs
        let total = first.load(Ordering::SeqCst) + second.load(Ordering::SeqCst);
        assert_eq!(total, 1);
    }

    #[test]
    fn test_overlapping_patterns_pick_one() {
        let mut router = Router::new();
        router.get("/users/me", tagged("me"));
        router.get("/users/:id", tagged("id"));

        let mut ctx = request("GET", "/users/me");
        let dispatched = router.dispatch(&mut ctx).expect("route");
        match dispatched.pattern {
            "/users/me" => assert!(ctx.params.is_empty()),
            "/users/:id" => assert_eq!(ctx.param("id"), Some("me")),
            other => panic!("unexpected pattern {other}"),
        }
    }

    #[test]
    fn test_routes_listing() {
        let mut router = Router::new();
        assert!(router.is_empty());
        router.get("/", tagged("root"));
        router.get("/about", tagged("about"));
        router.register("PUT", "/about", tagged("put"));

        let mut routes: Vec<_> = router.routes().collect();
        routes.sort_unstable();
        assert_eq!(
            routes,
            vec![("GET", "/"), ("GET", "/about"), ("PUT", "/about")]
        );
        assert_eq!(router.len(), 3);
    }
}
