//! Background thumbnail generation for Filekeep.
//!
//! This crate provides:
//! - Job queues (in-process channel or Redis list) that accept jobs from
//!   the file service and hand them to the worker
//! - The handler that renders thumbnails for one job
//! - A runner that polls a queue until shutdown

pub mod handler;
pub mod queue;
pub mod runner;

pub use handler::{JobExecutionError, ThumbnailJobHandler};
pub use queue::{JobQueue, JobSource, MemoryJobQueue, RedisJobQueue};
pub use runner::WorkerRunner;
