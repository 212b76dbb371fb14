//! Account domain models.
//!
//! Represents registered users in the directory, including the owner
//! account that runs the admin/supporter workflow.

use serde::{Deserialize, Serialize};

/// Role of an account within the community.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular creator account.
    User,
    /// The platform owner; may approve supporters and broadcast notices.
    Owner,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// A registered account as exposed to the rest of the application.
///
/// Never carries the stored credential; see [`StoredAccount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Login e-mail, unique within the directory.
    pub email: String,
    /// Avatar reference (URL).
    pub avatar_url: String,
    /// Short self-description.
    #[serde(default)]
    pub bio: String,
    /// Account role.
    #[serde(default)]
    pub role: Role,
    /// Selected theme key.
    pub theme: String,
    /// Whether the account has supporter status.
    #[serde(default)]
    pub supporter: bool,
}

impl Account {
    /// True for the owner account.
    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }
}

/// A directory entry as persisted: the account plus its credential.
///
/// Only the repository layer and the auth service see this type; everything
/// else works with [`Account`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAccount {
    #[serde(flatten)]
    pub account: Account,
    /// Stored password, compared verbatim on login.
    pub password: String,
}
