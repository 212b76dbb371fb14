//! Friend domain models.
//!
//! Friends are other accounts the local user has connected with; the
//! directory owns identity and presence, chats only reference it.

use serde::{Deserialize, Serialize};

/// A connected friend: identity plus presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    /// Account identifier of the friend.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Avatar reference (URL).
    pub avatar_url: String,
    /// Presence flag.
    #[serde(default)]
    pub online: bool,
}

/// A pending friend request from one account to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendRequest {
    /// Identity summary of the requester.
    pub from_id: u64,
    pub from_name: String,
    pub from_avatar_url: String,
    /// Account the request is addressed to.
    pub to_id: u64,
}

impl FriendRequest {
    /// Converts an accepted request into a friend entry, marked online the
    /// way a freshly accepted connection is shown.
    pub fn into_friend(self) -> Friend {
        Friend {
            id: self.from_id,
            name: self.from_name,
            avatar_url: self.from_avatar_url,
            online: true,
        }
    }
}
