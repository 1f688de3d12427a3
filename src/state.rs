use std::sync::Arc;

use crate::domain::registry::CodeRegistry;

/// Shared application state passed to every handler via axum `State`.
///
/// The same registry instance is shared with the Discord adapter, which calls
/// it directly rather than going back through the HTTP surface.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CodeRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<CodeRegistry>) -> Self {
        Self { registry }
    }
}
