//! Application state repository trait.

use super::model::AppState;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for application-level state.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Returns the full state snapshot.
    async fn get_state(&self) -> Result<AppState>;

    /// Replaces the full state snapshot.
    async fn save_state(&self, state: AppState) -> Result<()>;

    /// Gets the logged-in account id.
    async fn get_current_account(&self) -> Option<u64>;

    /// Sets the logged-in account id.
    async fn set_current_account(&self, account_id: u64) -> Result<()>;

    /// Clears the logged-in account id.
    async fn clear_current_account(&self) -> Result<()>;
}
