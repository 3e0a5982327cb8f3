//! Worker runner: polls the thumbnail queue and executes jobs.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use filekeep_core::config::WorkerConfig;

use crate::handler::{JobExecutionError, ThumbnailJobHandler};
use crate::queue::JobSource;

/// Pulls jobs one at a time until shutdown is signalled.
#[derive(Debug)]
pub struct WorkerRunner {
    source: Arc<dyn JobSource>,
    handler: Arc<ThumbnailJobHandler>,
    poll_interval: Duration,
}

impl WorkerRunner {
    pub fn new(
        source: Arc<dyn JobSource>,
        handler: Arc<ThumbnailJobHandler>,
        config: &WorkerConfig,
    ) -> Self {
        Self {
            source,
            handler,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    /// Run until `cancel` turns `true`. A non-empty queue is drained
    /// without pausing; an empty or failing one is polled again after
    /// the poll interval.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Thumbnail worker started"
        );

        loop {
            if *cancel.borrow() {
                break;
            }

            if self.process_next().await {
                continue;
            }

            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        break;
                    }
                }
                _ = time::sleep(self.poll_interval) => {}
            }
        }

        tracing::info!("Thumbnail worker stopped");
    }

    /// Take and execute one job. Returns whether a job was taken.
    pub async fn process_next(&self) -> bool {
        let job = match self.source.next().await {
            Ok(Some(job)) => job,
            Ok(None) => {
                tracing::trace!("No thumbnail jobs pending");
                return false;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to dequeue thumbnail job");
                return false;
            }
        };

        tracing::debug!(label = %job.label, "Processing job");
        match self.handler.execute(&job).await {
            Ok(_) => tracing::info!(label = %job.label, "Job completed"),
            Err(JobExecutionError::Permanent(msg)) => {
                tracing::error!(label = %job.label, reason = %msg, "Job failed permanently")
            }
            Err(JobExecutionError::Internal(e)) => {
                tracing::error!(label = %job.label, error = %e, "Job failed")
            }
        }
        true
    }
}
