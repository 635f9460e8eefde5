//! Click event model for realtime propagation.

use serde::{Deserialize, Serialize};

/// A single successful visit to a short link.
///
/// Created in the redirect resolver after the click counter has been
/// incremented, handed off through a bounded channel, and fanned out to
/// whatever observers are connected at that moment. Best-effort only: no
/// queuing for absent observers, no replay, no durability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub code: String,
}

impl ClickEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
