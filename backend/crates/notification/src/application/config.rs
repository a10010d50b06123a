//! Application Configuration

/// Notification application configuration
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Page size when the caller gives none
    pub default_list_limit: i64,
    /// Upper bound on the page size
    pub max_list_limit: i64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_list_limit: 20,
            max_list_limit: 100,
        }
    }
}

impl NotificationConfig {
    /// Resolve a requested page size into `1..=max_list_limit`
    pub fn clamp_limit(&self, requested: Option<i64>) -> i64 {
        requested
            .unwrap_or(self.default_list_limit)
            .clamp(1, self.max_list_limit)
    }
}
