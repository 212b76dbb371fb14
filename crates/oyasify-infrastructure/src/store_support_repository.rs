//! Supporter workflow repositories over the local store.

use crate::local_store::{LocalStore, keys};
use async_trait::async_trait;
use oyasify_core::error::{OyasifyError, Result};
use oyasify_core::support::{
    GlobalNotice, GlobalNoticeRepository, SupporterRequest, SupporterRequestRepository,
};

/// `SupporterRequestRepository` backed by the `supporter-requests` key.
#[derive(Clone)]
pub struct StoreSupporterRequestRepository {
    store: LocalStore,
}

impl StoreSupporterRequestRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SupporterRequestRepository for StoreSupporterRequestRepository {
    async fn list_all(&self) -> Result<Vec<SupporterRequest>> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.get_or(keys::SUPPORTER_REQUESTS, Vec::new()))
            .await
            .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))
    }

    async fn save(&self, request: &SupporterRequest) -> Result<()> {
        let store = self.store.clone();
        let request = request.clone();
        tokio::task::spawn_blocking(move || {
            store
                .update(
                    keys::SUPPORTER_REQUESTS,
                    Vec::new(),
                    |requests: &mut Vec<SupporterRequest>| {
                        requests.push(request.clone());
                    },
                )
                .map_err(|e| {
                    OyasifyError::data_access(format!("Failed to save supporter request: {e}"))
                })
        })
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))?
    }

    async fn delete(&self, user_id: u64) -> Result<()> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || {
            store
                .update(
                    keys::SUPPORTER_REQUESTS,
                    Vec::new(),
                    |requests: &mut Vec<SupporterRequest>| {
                        requests.retain(|r| r.user_id != user_id);
                    },
                )
                .map_err(|e| {
                    OyasifyError::data_access(format!("Failed to delete supporter request: {e}"))
                })
        })
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))?
    }
}

/// `GlobalNoticeRepository` backed by the `global-notice` key.
#[derive(Clone)]
pub struct StoreGlobalNoticeRepository {
    store: LocalStore,
}

impl StoreGlobalNoticeRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GlobalNoticeRepository for StoreGlobalNoticeRepository {
    async fn get(&self) -> Result<GlobalNotice> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || {
            store.get_or(keys::GLOBAL_NOTICE, GlobalNotice::default())
        })
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))
    }

    async fn set(&self, notice: &GlobalNotice) -> Result<()> {
        let store = self.store.clone();
        let notice = notice.clone();
        tokio::task::spawn_blocking(move || {
            store
                .set(keys::GLOBAL_NOTICE, &notice)
                .map_err(|e| OyasifyError::data_access(format!("Failed to save notice: {e}")))
        })
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn notice_defaults_to_seen_and_empty() {
        let dir = TempDir::new().unwrap();
        let repo = StoreGlobalNoticeRepository::new(LocalStore::new(dir.path()));

        let notice = repo.get().await.unwrap();
        assert!(notice.message.is_none());
        assert!(notice.seen);
    }

    #[tokio::test]
    async fn requests_delete_by_user() {
        let dir = TempDir::new().unwrap();
        let repo = StoreSupporterRequestRepository::new(LocalStore::new(dir.path()));

        repo.save(&SupporterRequest {
            user_id: 3,
            user_name: "Jess".to_string(),
        })
        .await
        .unwrap();
        repo.delete(3).await.unwrap();

        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
