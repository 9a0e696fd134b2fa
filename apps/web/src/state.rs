use std::sync::Arc;

use crate::config::Config;
use crate::screening::client::ResumeScreener;
use crate::screening::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable screening backend. Default: `HttpScreener` against the
    /// configured endpoint; tests swap in stubs.
    pub screener: Arc<dyn ResumeScreener>,
    /// In-memory screening sessions keyed by a browser cookie. Nothing is
    /// persisted across restarts.
    pub sessions: SessionStore,
    pub config: Config,
}
