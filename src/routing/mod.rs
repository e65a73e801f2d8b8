//! Routing module
//!
//! Maps a request method and path to a registered handler:
//! - Pattern matching with `:name` capture segments
//! - Route table keyed by method, then pattern

mod handler;
mod matcher;
mod table;

pub use handler::{Handler, HttpResponse, RequestContext};
pub use matcher::{capture_name, match_pattern, Params, CAPTURE_MARKER};
pub use table::{Dispatched, NotFound, RouteMatch, Router};
