use std::sync::Arc;

use crate::results::sink::ResultsSink;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable results store. Default: InMemorySink.
    pub sink: Arc<dyn ResultsSink>,
}
