//! Thumbnail worker configuration.

use serde::{Deserialize, Serialize};

/// Thumbnail queue and worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the in-process worker consumes the queue.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Queue backend: `"memory"` or `"redis"`.
    #[serde(default = "default_queue")]
    pub queue: String,
    /// Redis list holding pending thumbnail jobs.
    #[serde(default = "default_queue_key")]
    pub queue_key: String,
    /// Delay between polls of an empty queue, in milliseconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    /// Widths of the generated thumbnails, in pixels.
    #[serde(default = "default_thumbnail_widths")]
    pub thumbnail_widths: Vec<u32>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            queue: default_queue(),
            queue_key: default_queue_key(),
            poll_interval_ms: default_poll_interval(),
            thumbnail_widths: default_thumbnail_widths(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_queue() -> String {
    "memory".to_string()
}

fn default_queue_key() -> String {
    "queue:thumbnail".to_string()
}

fn default_poll_interval() -> u64 {
    500
}

fn default_thumbnail_widths() -> Vec<u32> {
    vec![500, 250, 100]
}
