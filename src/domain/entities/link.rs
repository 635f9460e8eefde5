//! Link entity: the mapping between a short code and its target URL.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A shortened link with its click statistics.
///
/// `code` and `target_url` are immutable after creation; `total_clicks` and
/// `last_clicked_at` are mutated exclusively by the store's atomic click
/// update, never by callers doing read-modify-write.
#[derive(Debug, Clone, FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Returns true once the link has been visited at least once.
    pub fn has_been_clicked(&self) -> bool {
        self.last_clicked_at.is_some()
    }
}

/// Input data for creating a new link.
///
/// `id`, counters, and timestamps are assigned by the store at insert time.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}
