//! User directory repository over the local store.

use crate::local_store::{LocalStore, keys};
use async_trait::async_trait;
use oyasify_core::error::{OyasifyError, Result};
use oyasify_core::user::{AccountRepository, StoredAccount};

/// `AccountRepository` backed by the `users` key of the local store.
///
/// Entries carry the stored credential; this type is consumed by the auth
/// service only, which strips credentials before anything leaves it.
#[derive(Clone)]
pub struct StoreAccountRepository {
    store: LocalStore,
}

impl StoreAccountRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccountRepository for StoreAccountRepository {
    async fn list_all(&self) -> Result<Vec<StoredAccount>> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.get_or(keys::USERS, Vec::new()))
            .await
            .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))
    }

    async fn find_by_id(&self, account_id: u64) -> Result<Option<StoredAccount>> {
        let entries = self.list_all().await?;
        Ok(entries.into_iter().find(|e| e.account.id == account_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoredAccount>> {
        let entries = self.list_all().await?;
        Ok(entries.into_iter().find(|e| e.account.email == email))
    }

    async fn save(&self, entry: &StoredAccount) -> Result<()> {
        let store = self.store.clone();
        let entry = entry.clone();
        tokio::task::spawn_blocking(move || {
            store
                .update(keys::USERS, Vec::new(), |entries: &mut Vec<StoredAccount>| {
                    match entries.iter_mut().find(|e| e.account.id == entry.account.id) {
                        Some(slot) => *slot = entry.clone(),
                        None => entries.push(entry.clone()),
                    }
                })
                .map_err(|e| OyasifyError::data_access(format!("Failed to save account: {e}")))
        })
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))?
    }
}
