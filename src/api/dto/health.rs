//! DTOs for the health check endpoint.

use serde::Serialize;

use crate::application::services::StudentStats;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
}

/// Outcome of counting students through the pool.
///
/// Carries the record counts when the database answered, the error otherwise.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseCheck {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_students: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_students: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DatabaseCheck {
    pub fn ok(stats: StudentStats) -> Self {
        Self {
            status: "ok".to_string(),
            total_students: Some(stats.total),
            active_students: Some(stats.active),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            status: "error".to_string(),
            total_students: None,
            active_students: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
