//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL, counting the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Format check (malformed codes 404 without a storage round-trip)
/// 2. Lookup + atomic click increment in the store
/// 3. Fire-and-forget click event hand-off
/// 4. `302 Found` with the target URL in `Location`
///
/// # Errors
///
/// Returns 404 Not Found for malformed or unknown codes.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.redirect.resolve(&code).await?;

    debug!(code = %link.code, target = %link.target_url, "Redirecting");
    Ok((StatusCode::FOUND, [(header::LOCATION, link.target_url)]))
}
