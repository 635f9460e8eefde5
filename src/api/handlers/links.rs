//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::links::{CreateLinkRequest, LinkView};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/docs", "code": "Ab3dE9" }
/// ```
///
/// `code` is optional; without it a random 6-character code is allocated.
///
/// # Errors
///
/// Returns 400 Bad Request for a missing/invalid URL or malformed code,
/// and 409 Conflict when the explicit code is already taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkView>), AppError> {
    let link = state
        .links
        .create_link(payload.url.unwrap_or_default(), payload.code)
        .await?;

    let short_url = state.links.short_url(&link.code);
    Ok((StatusCode::CREATED, Json(LinkView::from_link(link, short_url))))
}

/// Lists all short links with their statistics, newest creation first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkView>>, AppError> {
    let links = state.links.list_links().await?;

    let views = links
        .into_iter()
        .map(|link| {
            let short_url = state.links.short_url(&link.code);
            LinkView::from_link(link, short_url)
        })
        .collect();

    Ok(Json(views))
}

/// Fetches stats for a specific short code.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkView>, AppError> {
    let link = state.links.get_link(&code).await?;

    let short_url = state.links.short_url(&link.code);
    Ok(Json(LinkView::from_link(link, short_url)))
}

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code; 204 No Content on success.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.links.delete_link(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
