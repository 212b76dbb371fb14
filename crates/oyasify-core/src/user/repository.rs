//! Account directory repository trait.

use super::model::StoredAccount;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the user directory.
///
/// The directory holds every registered account, including credentials;
/// implementations must not hand `StoredAccount` values past the service
/// layer.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Lists every directory entry.
    async fn list_all(&self) -> Result<Vec<StoredAccount>>;

    /// Finds an entry by account id.
    async fn find_by_id(&self, account_id: u64) -> Result<Option<StoredAccount>>;

    /// Finds an entry by login e-mail.
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredAccount>>;

    /// Inserts or replaces an entry (matched by account id).
    async fn save(&self, entry: &StoredAccount) -> Result<()>;
}
