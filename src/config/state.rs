// Application state module
// Configuration and the frozen route table shared by every connection

use crate::routing::Router;

use super::types::Config;

/// Application state
///
/// Built once after all routes are registered, then shared behind an `Arc`.
/// The router cannot be mutated from here on.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub router: Router,
}

impl AppState {
    pub const fn new(config: Config, router: Router) -> Self {
        Self { config, router }
    }

    pub fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
