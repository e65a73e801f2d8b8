//! Request handler module
//!
//! Bridges hyper requests to the route table and provides the routes the
//! binary registers at startup.

pub mod router;
pub mod routes;

// Re-export main entry point
pub use router::handle_request;
pub use routes::{register_config_routes, register_demo_routes};
