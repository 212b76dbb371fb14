//! Friend directory service.
//!
//! Search the user directory, exchange friend requests, and maintain the
//! friend list.

use oyasify_core::error::{OyasifyError, Result};
use oyasify_core::friend::{Friend, FriendRepository, FriendRequest, FriendRequestRepository};
use oyasify_core::user::{Account, AccountRepository};
use std::sync::Arc;
use tracing::info;

pub struct FriendService {
    friends: Arc<dyn FriendRepository>,
    requests: Arc<dyn FriendRequestRepository>,
    accounts: Arc<dyn AccountRepository>,
}

impl FriendService {
    pub fn new(
        friends: Arc<dyn FriendRepository>,
        requests: Arc<dyn FriendRequestRepository>,
        accounts: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            friends,
            requests,
            accounts,
        }
    }

    /// Lists the current friend list.
    pub async fn list_friends(&self) -> Result<Vec<Friend>> {
        self.friends.list_all().await
    }

    /// Resolves a friend by id.
    pub async fn find_friend(&self, friend_id: u64) -> Result<Option<Friend>> {
        self.friends.find_by_id(friend_id).await
    }

    /// Searches the directory for addable accounts by name.
    ///
    /// Excludes the searcher, existing friends, and accounts with a pending
    /// inbound request to the searcher. A blank query yields nothing.
    pub async fn search_directory(&self, me: &Account, query: &str) -> Result<Vec<Account>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let friends = self.friends.list_all().await?;
        let incoming = self.incoming_requests(me.id).await?;
        let accounts = self.accounts.list_all().await?;

        Ok(accounts
            .into_iter()
            .map(|e| e.account)
            .filter(|a| a.id != me.id)
            .filter(|a| !friends.iter().any(|f| f.id == a.id))
            .filter(|a| !incoming.iter().any(|r| r.from_id == a.id))
            .filter(|a| a.name.to_lowercase().contains(&query))
            .collect())
    }

    /// Pending requests addressed to `account_id`.
    pub async fn incoming_requests(&self, account_id: u64) -> Result<Vec<FriendRequest>> {
        let requests = self.requests.list_all().await?;
        Ok(requests.into_iter().filter(|r| r.to_id == account_id).collect())
    }

    /// Sends a friend request.
    ///
    /// Returns `false` (without writing) when a request from `me` to the
    /// same account is already pending.
    pub async fn send_request(&self, me: &Account, to_id: u64) -> Result<bool> {
        let requests = self.requests.list_all().await?;
        if requests.iter().any(|r| r.from_id == me.id && r.to_id == to_id) {
            return Ok(false);
        }

        self.requests
            .save(&FriendRequest {
                from_id: me.id,
                from_name: me.name.clone(),
                from_avatar_url: me.avatar_url.clone(),
                to_id,
            })
            .await?;
        info!(target: "friends", from = me.id, to = to_id, "friend request sent");
        Ok(true)
    }

    /// Accepts a pending request: the requester joins the friend list and
    /// the request is removed.
    pub async fn accept_request(&self, me: &Account, from_id: u64) -> Result<Friend> {
        let request = self
            .incoming_requests(me.id)
            .await?
            .into_iter()
            .find(|r| r.from_id == from_id)
            .ok_or_else(|| OyasifyError::not_found("friend request", from_id.to_string()))?;

        let friend = request.into_friend();
        self.friends.save(&friend).await?;
        self.requests.delete(from_id, me.id).await?;
        info!(target: "friends", friend_id = friend.id, "friend request accepted");
        Ok(friend)
    }

    /// Declines a pending request.
    pub async fn decline_request(&self, me: &Account, from_id: u64) -> Result<()> {
        self.requests.delete(from_id, me.id).await
    }
}
