//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, migrations, fan-out worker spawning,
//! and the Axum server lifecycle.

use crate::application::services::{LinkService, RedirectService};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::notifier::{ClickNotifier, run_click_fanout};
use crate::infrastructure::persistence::PgLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Embedded migrations
/// - Click fan-out worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let notifier = ClickNotifier::new();
    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_fanout(click_rx, notifier.clone()));
    tracing::info!("Click fan-out worker started");

    let repository: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(Arc::new(pool)));

    let state = AppState {
        links: Arc::new(LinkService::new(
            repository.clone(),
            config.base_url.clone(),
        )),
        redirect: Arc::new(RedirectService::new(repository, click_tx)),
        notifier,
        started_at: Instant::now(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
