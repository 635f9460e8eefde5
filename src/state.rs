//! Shared application state injected into all handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::application::services::{LinkService, RedirectService};
use crate::infrastructure::notifier::ClickNotifier;

/// Dependencies shared across request handlers.
///
/// Built once at startup with explicit lifecycles (no hidden singletons),
/// so tests can assemble the same state over an in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub links: Arc<LinkService>,
    pub redirect: Arc<RedirectService>,
    /// Observer registration point for click events. Transports (websocket,
    /// SSE, whatever drains it) subscribe here; the core only broadcasts.
    pub notifier: ClickNotifier,
    pub started_at: Instant,
}
