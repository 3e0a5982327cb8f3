//! Thumbnail job queues.
//!
//! Each backend is both the producer side ([`JobDispatcher`]) used by the
//! file service and the consumer side ([`JobSource`]) polled by the worker.

use std::sync::Arc;

use async_trait::async_trait;
use redis::AsyncCommands;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info};

use filekeep_cache::redis::RedisClient;
use filekeep_core::config::{RedisCacheConfig, WorkerConfig};
use filekeep_core::error::{AppError, ErrorKind};
use filekeep_core::result::AppResult;
use filekeep_core::traits::dispatch::JobDispatcher;
use filekeep_core::types::ThumbnailJob;

/// Consumer side of a job queue.
#[async_trait]
pub trait JobSource: Send + Sync + std::fmt::Debug + 'static {
    /// Take the oldest pending job, or `None` if the queue is empty.
    async fn next(&self) -> AppResult<Option<ThumbnailJob>>;
}

/// Both ends of one queue.
#[derive(Debug, Clone)]
pub struct JobQueue {
    pub dispatcher: Arc<dyn JobDispatcher>,
    pub source: Arc<dyn JobSource>,
}

impl JobQueue {
    fn from_backend<Q: JobDispatcher + JobSource>(queue: Q) -> Self {
        let queue = Arc::new(queue);
        Self {
            dispatcher: queue.clone(),
            source: queue,
        }
    }

    pub fn in_memory() -> Self {
        Self::from_backend(MemoryJobQueue::new())
    }
}

/// Open the queue backend selected by `config.queue`.
pub async fn connect(config: &WorkerConfig, redis: &RedisCacheConfig) -> AppResult<JobQueue> {
    match config.queue.as_str() {
        "memory" => {
            info!("Using in-process thumbnail queue");
            Ok(JobQueue::in_memory())
        }
        "redis" => {
            let client = RedisClient::connect(redis).await?;
            Ok(JobQueue::from_backend(RedisJobQueue::new(
                client,
                &config.queue_key,
            )))
        }
        other => Err(AppError::configuration(format!(
            "Unknown worker queue: '{other}'. Supported: memory, redis"
        ))),
    }
}

/// Unbounded in-process FIFO. Jobs are lost on exit.
#[derive(Debug)]
pub struct MemoryJobQueue {
    tx: mpsc::UnboundedSender<ThumbnailJob>,
    rx: Mutex<mpsc::UnboundedReceiver<ThumbnailJob>>,
}

impl MemoryJobQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(rx),
        }
    }
}

impl Default for MemoryJobQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobDispatcher for MemoryJobQueue {
    async fn enqueue(&self, job: ThumbnailJob) -> AppResult<()> {
        debug!(label = %job.label, "Queued thumbnail job");
        self.tx
            .send(job)
            .map_err(|_| AppError::queue("Thumbnail queue is closed"))
    }
}

#[async_trait]
impl JobSource for MemoryJobQueue {
    async fn next(&self) -> AppResult<Option<ThumbnailJob>> {
        Ok(self.rx.lock().await.try_recv().ok())
    }
}

/// Redis list queue: producers `LPUSH`, the worker `RPOP`s.
///
/// Jobs are stored as JSON so other consumers can share the list.
#[derive(Debug, Clone)]
pub struct RedisJobQueue {
    client: RedisClient,
    key: String,
}

impl RedisJobQueue {
    pub fn new(client: RedisClient, key: &str) -> Self {
        let key = client.prefixed_key(key);
        Self { client, key }
    }

    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Queue, format!("Redis queue error: {e}"), e)
    }
}

#[async_trait]
impl JobDispatcher for RedisJobQueue {
    async fn enqueue(&self, job: ThumbnailJob) -> AppResult<()> {
        let payload = serde_json::to_string(&job)?;
        let mut conn = self.client.conn_mut();
        let _: i64 = conn
            .lpush(&self.key, payload)
            .await
            .map_err(Self::map_err)?;
        debug!(label = %job.label, "Queued thumbnail job");
        Ok(())
    }
}

#[async_trait]
impl JobSource for RedisJobQueue {
    async fn next(&self) -> AppResult<Option<ThumbnailJob>> {
        let mut conn = self.client.conn_mut();
        let raw: Option<String> = conn
            .rpop(&self.key, None)
            .await
            .map_err(Self::map_err)?;

        match raw {
            None => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        }
    }
}
