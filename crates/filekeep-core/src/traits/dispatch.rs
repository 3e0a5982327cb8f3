//! One-way hand-off of derived-asset jobs.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::ThumbnailJob;

/// Accepts thumbnail jobs for asynchronous processing.
///
/// Delivery is best effort: an `Ok` means the job was handed to the
/// queue, nothing more. There is no acknowledgement path back to the caller.
#[async_trait]
pub trait JobDispatcher: Send + Sync + std::fmt::Debug + 'static {
    async fn enqueue(&self, job: ThumbnailJob) -> AppResult<()>;
}
