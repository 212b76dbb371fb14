//! Friend and friend-request repositories over the local store.

use crate::local_store::{LocalStore, keys};
use async_trait::async_trait;
use oyasify_core::error::{OyasifyError, Result};
use oyasify_core::friend::{Friend, FriendRepository, FriendRequest, FriendRequestRepository};

/// `FriendRepository` backed by the `friends` key of the local store.
#[derive(Clone)]
pub struct StoreFriendRepository {
    store: LocalStore,
}

impl StoreFriendRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FriendRepository for StoreFriendRepository {
    async fn list_all(&self) -> Result<Vec<Friend>> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.get_or(keys::FRIENDS, Vec::new()))
            .await
            .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))
    }

    async fn find_by_id(&self, friend_id: u64) -> Result<Option<Friend>> {
        let friends = self.list_all().await?;
        Ok(friends.into_iter().find(|f| f.id == friend_id))
    }

    async fn save(&self, friend: &Friend) -> Result<()> {
        let store = self.store.clone();
        let friend = friend.clone();
        tokio::task::spawn_blocking(move || {
            store
                .update(keys::FRIENDS, Vec::new(), |friends: &mut Vec<Friend>| {
                    match friends.iter_mut().find(|f| f.id == friend.id) {
                        Some(slot) => *slot = friend.clone(),
                        None => friends.push(friend.clone()),
                    }
                })
                .map_err(|e| OyasifyError::data_access(format!("Failed to save friend: {e}")))
        })
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))?
    }
}

/// `FriendRequestRepository` backed by the `friend-requests` key.
#[derive(Clone)]
pub struct StoreFriendRequestRepository {
    store: LocalStore,
}

impl StoreFriendRequestRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FriendRequestRepository for StoreFriendRequestRepository {
    async fn list_all(&self) -> Result<Vec<FriendRequest>> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.get_or(keys::FRIEND_REQUESTS, Vec::new()))
            .await
            .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))
    }

    async fn save(&self, request: &FriendRequest) -> Result<()> {
        let store = self.store.clone();
        let request = request.clone();
        tokio::task::spawn_blocking(move || {
            store
                .update(
                    keys::FRIEND_REQUESTS,
                    Vec::new(),
                    |requests: &mut Vec<FriendRequest>| {
                        requests.push(request.clone());
                    },
                )
                .map_err(|e| {
                    OyasifyError::data_access(format!("Failed to save friend request: {e}"))
                })
        })
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))?
    }

    async fn delete(&self, from_id: u64, to_id: u64) -> Result<()> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || {
            store
                .update(
                    keys::FRIEND_REQUESTS,
                    Vec::new(),
                    |requests: &mut Vec<FriendRequest>| {
                        requests.retain(|r| !(r.from_id == from_id && r.to_id == to_id));
                    },
                )
                .map_err(|e| {
                    OyasifyError::data_access(format!("Failed to delete friend request: {e}"))
                })
        })
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn friend(id: u64, name: &str) -> Friend {
        Friend {
            id,
            name: name.to_string(),
            avatar_url: format!("https://example.com/{id}.png"),
            online: false,
        }
    }

    #[tokio::test]
    async fn save_replaces_by_id() {
        let dir = TempDir::new().unwrap();
        let repo = StoreFriendRepository::new(LocalStore::new(dir.path()));

        repo.save(&friend(1, "Alex")).await.unwrap();
        let mut updated = friend(1, "Alex");
        updated.online = true;
        repo.save(&updated).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].online);
    }

    #[tokio::test]
    async fn request_delete_matches_both_ends() {
        let dir = TempDir::new().unwrap();
        let repo = StoreFriendRequestRepository::new(LocalStore::new(dir.path()));

        let request = FriendRequest {
            from_id: 5,
            from_name: "Quinn".to_string(),
            from_avatar_url: String::new(),
            to_id: 1,
        };
        repo.save(&request).await.unwrap();
        repo.delete(5, 2).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 1);

        repo.delete(5, 1).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
