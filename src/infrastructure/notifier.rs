//! Best-effort click event fan-out to connected observers.
//!
//! The redirect resolver never talks to observers directly: it drops a
//! [`ClickEvent`] into a bounded mpsc channel and moves on. A background
//! task drains that channel into a broadcast channel, which is the actual
//! observer set. Observers subscribe and unsubscribe by obtaining and
//! dropping a receiver; events sent while nobody is subscribed are simply
//! discarded, and there is no replay for late subscribers.

use tokio::sync::{broadcast, mpsc};
use tracing::debug;

use crate::domain::click_event::ClickEvent;

/// Broadcast buffer per observer. A slow observer that falls this far
/// behind starts losing events, which is acceptable for a best-effort feed.
const OBSERVER_BUFFER: usize = 256;

/// Broadcasts click events to all currently-subscribed observers.
#[derive(Clone)]
pub struct ClickNotifier {
    sender: broadcast::Sender<ClickEvent>,
}

impl ClickNotifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(OBSERVER_BUFFER);
        Self { sender }
    }

    /// Delivers `event` to every currently-subscribed observer.
    ///
    /// With no observers connected the send fails; that is the expected
    /// idle state, not an error.
    pub fn broadcast(&self, event: ClickEvent) {
        let _ = self.sender.send(event);
    }

    /// Registers a new observer. Dropping the receiver unsubscribes.
    ///
    /// The receiver only sees events broadcast after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ClickEvent> {
        self.sender.subscribe()
    }

    /// Number of currently-subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ClickNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains the resolver's click channel into the observer broadcast.
///
/// Runs until every sender half is dropped, i.e. for the life of the
/// process. Spawned once at startup.
pub async fn run_click_fanout(mut rx: mpsc::Receiver<ClickEvent>, notifier: ClickNotifier) {
    while let Some(event) = rx.recv().await {
        debug!(code = %event.code, observers = notifier.observer_count(), "Fanning out click event");
        notifier.broadcast(event);
    }
}
