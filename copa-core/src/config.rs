use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_STALE_SECS: u64 = 5 * 60;
pub const DEFAULT_RETRY_COUNT: u8 = 1;

/// Runtime tunables for the API gateway and the request cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base: String,
    pub stale_time_secs: u64,
    pub retry_count: u8,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            stale_time_secs: DEFAULT_STALE_SECS,
            retry_count: DEFAULT_RETRY_COUNT,
        }
    }
}

impl ClientConfig {
    /// Override the API base, ignoring blank values and trailing slashes.
    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api_base = trimmed.to_string();
        }
        self
    }

    #[must_use]
    pub fn stale_time(&self) -> TimeDelta {
        i64::try_from(self.stale_time_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }
}
