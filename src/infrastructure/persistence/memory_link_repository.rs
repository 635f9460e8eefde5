//! In-memory implementation of the link repository.
//!
//! Stands in for PostgreSQL in tests, with the same atomicity guarantees:
//! every operation runs under one mutex acquisition, so the
//! uniqueness-check-plus-insert and the click increment are indivisible.
//! The lock is never held across an await point.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Process-local link store keyed by code.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<HashMap<String, Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Link>> {
        // Poisoning only happens if a holder panicked; the map itself is
        // still consistent because every mutation completes in one section.
        self.links.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.lock();

        if links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Code already exists",
                json!({ "code": new_link.code }),
            ));
        }

        let link = Link {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            code: new_link.code.clone(),
            target_url: new_link.target_url,
            total_clicks: 0,
            last_clicked_at: None,
            created_at: Utc::now(),
        };

        links.insert(new_link.code, link.clone());
        Ok(link)
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.lock().contains_key(code))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.lock().get(code).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self.lock().values().cloned().collect();
        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(links)
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.lock().remove(code).is_some())
    }

    async fn record_click(&self, id: i64) -> Result<Option<Link>, AppError> {
        let mut links = self.lock();

        let Some(link) = links.values_mut().find(|l| l.id == id) else {
            return Ok(None);
        };

        link.total_clicks += 1;
        link.last_clicked_at = Some(Utc::now());
        Ok(Some(link.clone()))
    }
}
