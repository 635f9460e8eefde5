//! DTO for the health probe.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Process liveness report. Deliberately touches no core component.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}
