//! Repository trait for short link storage.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for short links.
///
/// The store is the single owner of link state and the only place mutation
/// happens. All concurrency correctness is delegated here: `insert` must be
/// atomic with respect to code uniqueness, and `record_click` must be a
/// single atomic read-modify-write, so callers never need an application
/// level lock.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - in-process,
///   used by integration tests
/// - Mocks via `mockall` under `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link row.
    ///
    /// The uniqueness check and the insert are one atomic operation; there
    /// is no probe-then-write window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists, and
    /// [`AppError::Unavailable`] / [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Advisory existence probe used before attempting an insert.
    ///
    /// A race can still occur between probe and insert; correctness rests on
    /// [`Self::insert`]'s atomicity, not on this check.
    async fn exists_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Finds a link by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links, newest creation first.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Hard-deletes a link, freeing its code for reuse.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the code was
    /// unknown.
    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically increments `total_clicks` by one and stamps
    /// `last_clicked_at`, returning the updated row.
    ///
    /// Returns `Ok(None)` when the id no longer exists (deleted between
    /// lookup and click). Concurrent calls are serialized by the store; no
    /// increment is ever lost.
    async fn record_click(&self, id: i64) -> Result<Option<Link>, AppError>;
}
