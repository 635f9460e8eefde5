//! Redirect resolver: code lookup, atomic click accounting, event hand-off.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::validate::is_valid_code;
use serde_json::json;

/// Resolves short codes to their target URLs, recording one click per
/// successful visit.
///
/// Click events leave through a bounded channel, never through a direct
/// call into the transport: a full queue or an absent fan-out task can
/// delay observers but can never block or fail the redirect.
pub struct RedirectService {
    repository: Arc<dyn LinkRepository>,
    click_tx: mpsc::Sender<ClickEvent>,
}

impl RedirectService {
    pub fn new(repository: Arc<dyn LinkRepository>, click_tx: mpsc::Sender<ClickEvent>) -> Self {
        Self {
            repository,
            click_tx,
        }
    }

    /// Resolves a code to its link, incrementing the click counter.
    ///
    /// A code that fails the format check is rejected without touching
    /// storage. On success the returned link reflects the post-increment
    /// state, and one [`ClickEvent`] has been handed off for broadcast.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for malformed or unknown codes, also
    /// when the link is deleted concurrently with the visit.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::not_found(
                "Code not found",
                json!({ "code": code }),
            ));
        }

        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Code not found", json!({ "code": code })))?;

        let link = self
            .repository
            .record_click(link.id)
            .await?
            .ok_or_else(|| AppError::not_found("Code not found", json!({ "code": code })))?;

        if self
            .click_tx
            .try_send(ClickEvent::new(link.code.clone()))
            .is_err()
        {
            // Queue full or fan-out gone. The redirect still succeeds.
            warn!(code = %link.code, "Dropped click event");
        }

        Ok(link)
    }
}
