//! Chat repository over the local store.

use crate::local_store::{LocalStore, keys};
use async_trait::async_trait;
use oyasify_core::chat::{ChatRepository, ChatSession};
use oyasify_core::error::{OyasifyError, Result};

/// `ChatRepository` backed by the `chats` key of the local store.
///
/// Sessions are stored as one JSON array keyed by friend, matching the
/// original's single `oyasify-chats` entry. Writes replace the friend's
/// snapshot (last-writer-wins).
#[derive(Clone)]
pub struct StoreChatRepository {
    store: LocalStore,
}

impl StoreChatRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ChatRepository for StoreChatRepository {
    async fn find_by_friend(&self, friend_id: u64) -> Result<Option<ChatSession>> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || {
            let sessions: Vec<ChatSession> = store.get_or(keys::CHATS, Vec::new());
            sessions.into_iter().find(|s| s.friend_id == friend_id)
        })
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))
    }

    async fn save(&self, session: &ChatSession) -> Result<()> {
        let store = self.store.clone();
        let session = session.clone();
        tokio::task::spawn_blocking(move || {
            store
                .update(keys::CHATS, Vec::new(), |sessions: &mut Vec<ChatSession>| {
                    match sessions.iter_mut().find(|s| s.friend_id == session.friend_id) {
                        Some(slot) => *slot = session.clone(),
                        None => sessions.push(session.clone()),
                    }
                })
                .map_err(|e| OyasifyError::data_access(format!("Failed to save chat: {e}")))
        })
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))?
    }

    async fn list_all(&self) -> Result<Vec<ChatSession>> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.get_or(keys::CHATS, Vec::new()))
            .await
            .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))
    }
}
