//! pathmux: a small HTTP router
//!
//! Routes are registered per method and pattern on a [`routing::Router`],
//! which is then frozen inside [`config::AppState`] and served over
//! hyper. Pattern segments starting with `:` capture the matching path
//! segment:
//!
//! ```
//! use pathmux::http::build_text_response;
//! use pathmux::routing::{RequestContext, Router};
//! use hyper::Method;
//!
//! let mut router = Router::new();
//! router.get("/users/:id", |ctx: &RequestContext| {
//!     build_text_response(200, format!("user {}", ctx.param("id").unwrap_or("?")))
//! });
//!
//! let mut ctx = RequestContext::new(Method::GET, "/users/42");
//! let dispatched = router.dispatch(&mut ctx).unwrap();
//! assert_eq!(dispatched.pattern, "/users/:id");
//! assert_eq!(ctx.param("id"), Some("42"));
//! ```

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
