use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::client::DEFAULT_BASE_URL;

pub const DEFAULT_CANDIDATE_ID: &str = "175f45fe-b12d-4337-8723-1fb2c8cc8c60";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub candidate_id: String,

    // Pause between goal rows, the service rate-limits bursts
    pub row_delay_secs: u64,

    /// Per-request timeout; `None` waits forever.
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            candidate_id: DEFAULT_CANDIDATE_ID.into(),
            row_delay_secs: 3,
            timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn row_delay(&self) -> Duration {
        Duration::from_secs(self.row_delay_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
