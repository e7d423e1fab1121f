//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::AliasService;

#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService>,
    /// Public prefix for `short_url` in responses, if configured.
    pub base_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(alias_service: Arc<AliasService>, base_url: Option<String>) -> Self {
        Self {
            alias_service,
            base_url: base_url.map(Arc::from),
        }
    }
}
