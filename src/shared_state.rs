use std::sync::Arc;
use axum::extract::FromRef;
use crate::config::Config;

/// Read-only state shared by every handler. Calculations keep nothing
/// between requests, so configuration is all there is.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config) }
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
