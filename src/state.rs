//! Shared application state for all routes.

use crate::store::BlogStore;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    /// Constructed once per process (or per test) and shared by every handler.
    pub store: Arc<BlogStore>,
}

impl AppState {
    pub fn new(store: BlogStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
