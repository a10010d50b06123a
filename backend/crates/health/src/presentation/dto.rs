//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::report::{CheckStatus, HealthReport};

/// Per-dependency outcome, only sent when unhealthy
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecksDto {
    pub database: CheckStatus,
    pub cache: CheckStatus,
}

impl From<HealthReport> for ChecksDto {
    fn from(report: HealthReport) -> Self {
        Self {
            database: report.database,
            cache: report.cache,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`
    pub status: &'static str,
    /// RFC 3339, UTC
    pub timestamp: String,
    /// Seconds since process start
    pub uptime: f64,
    pub environment: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<ChecksDto>,
}
