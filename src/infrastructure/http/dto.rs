//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::ports::UserRecord;

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    #[serde(rename = "uptimeSeconds")]
    pub uptime_seconds: f64,
}

// ============================================================================
// Record DTOs
// ============================================================================

/// Create request. Fields are optional so that missing keys reach the 400
/// validation path instead of being rejected by the deserializer.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub records: Vec<UserRecord>,
}

#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub record: UserRecord,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
