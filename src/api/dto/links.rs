//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// `url` is modeled as optional so a missing field surfaces as a 400
/// validation error from the registry instead of a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub url: Option<String>,
    /// Optional explicit short code; when present it is used exactly as
    /// given or the request fails.
    pub code: Option<String>,
}

/// JSON representation of a link, including the derived short URL.
#[derive(Debug, Serialize)]
pub struct LinkView {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}

impl LinkView {
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            code: link.code,
            target_url: link.target_url,
            total_clicks: link.total_clicks,
            last_clicked_at: link.last_clicked_at,
            created_at: link.created_at,
            short_url,
        }
    }
}
