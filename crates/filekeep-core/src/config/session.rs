//! Session token configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session lifetime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Lifetime of an issued token in seconds. Use does not extend it.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl(),
        }
    }
}

fn default_ttl() -> u64 {
    24 * 60 * 60
}
