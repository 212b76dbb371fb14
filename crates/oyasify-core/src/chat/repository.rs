//! Chat repository trait.
//!
//! Defines the interface for chat session persistence operations.

use super::model::ChatSession;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing chat session persistence.
///
/// This trait defines the contract for persisting and retrieving chat
/// sessions, decoupling the chat core from the specific storage mechanism
/// (JSON file store, in-memory map, remote API).
///
/// Persistence is last-writer-wins; serialization of transitions within a
/// single session is the caller's concern, not the repository's.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Finds the session for a friend.
    ///
    /// Returns `Ok(None)` when no conversation has been opened yet.
    async fn find_by_friend(&self, friend_id: u64) -> Result<Option<ChatSession>>;

    /// Saves a session, replacing any previous snapshot for the friend.
    async fn save(&self, session: &ChatSession) -> Result<()>;

    /// Lists all stored sessions.
    async fn list_all(&self) -> Result<Vec<ChatSession>>;
}
