#![allow(dead_code)]

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

use linklet::application::services::{LinkService, RedirectService};
use linklet::domain::entities::{Link, NewLink};
use linklet::domain::repositories::LinkRepository;
use linklet::infrastructure::notifier::{ClickNotifier, run_click_fanout};
use linklet::infrastructure::persistence::InMemoryLinkRepository;
use linklet::state::AppState;

pub const BASE_URL: &str = "http://localhost:4000";

/// Builds the full application state over an in-memory store, with the
/// click fan-out worker running, exactly as `server::run` wires it for
/// PostgreSQL.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let repo_dyn: Arc<dyn LinkRepository> = repository.clone();

    let notifier = ClickNotifier::new();
    let (click_tx, click_rx) = mpsc::channel(100);
    tokio::spawn(run_click_fanout(click_rx, notifier.clone()));

    let state = AppState {
        links: Arc::new(LinkService::new(repo_dyn.clone(), BASE_URL.to_string())),
        redirect: Arc::new(RedirectService::new(repo_dyn, click_tx)),
        notifier,
        started_at: Instant::now(),
    };

    (state, repository)
}

pub async fn seed_link(repository: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    repository
        .insert(NewLink {
            code: code.to_string(),
            target_url: url.to_string(),
        })
        .await
        .unwrap()
}
