//! Health Report

use serde::Serialize;

/// Outcome of a single dependency check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Error,
    Timeout,
}

impl CheckStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub database: CheckStatus,
    pub cache: CheckStatus,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.database.is_ok() && self.cache.is_ok()
    }
}
