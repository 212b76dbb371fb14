//! Friend and friend-request repository traits.

use super::model::{Friend, FriendRequest};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the local user's friend list.
#[async_trait]
pub trait FriendRepository: Send + Sync {
    /// Lists all friends.
    async fn list_all(&self) -> Result<Vec<Friend>>;

    /// Finds a friend by id.
    async fn find_by_id(&self, friend_id: u64) -> Result<Option<Friend>>;

    /// Adds a friend. Saving an existing id replaces the entry.
    async fn save(&self, friend: &Friend) -> Result<()>;
}

/// An abstract repository for pending friend requests.
#[async_trait]
pub trait FriendRequestRepository: Send + Sync {
    /// Lists all pending requests.
    async fn list_all(&self) -> Result<Vec<FriendRequest>>;

    /// Appends a pending request.
    async fn save(&self, request: &FriendRequest) -> Result<()>;

    /// Removes the request between two accounts, if present.
    async fn delete(&self, from_id: u64, to_id: u64) -> Result<()>;
}
