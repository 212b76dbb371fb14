//! Supporter workflow repository traits.

use super::model::{GlobalNotice, SupporterRequest};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for pending supporter requests.
#[async_trait]
pub trait SupporterRequestRepository: Send + Sync {
    /// Lists all pending requests.
    async fn list_all(&self) -> Result<Vec<SupporterRequest>>;

    /// Appends a pending request.
    async fn save(&self, request: &SupporterRequest) -> Result<()>;

    /// Removes the request for an account, if present.
    async fn delete(&self, user_id: u64) -> Result<()>;
}

/// An abstract repository for the owner's global notice.
#[async_trait]
pub trait GlobalNoticeRepository: Send + Sync {
    /// Returns the current notice (default when none was ever broadcast).
    async fn get(&self) -> Result<GlobalNotice>;

    /// Replaces the current notice.
    async fn set(&self, notice: &GlobalNotice) -> Result<()>;
}
