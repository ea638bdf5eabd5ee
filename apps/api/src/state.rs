use std::sync::Arc;

use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single session owned by this application instance.
    pub session: Arc<Session>,
}
