//! Supporter workflow domain models.

use serde::{Deserialize, Serialize};

/// A pending request to become a supporter, filed by a regular account and
/// resolved by the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupporterRequest {
    pub user_id: u64,
    pub user_name: String,
}

/// The owner's broadcast notice, shown to every account until seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalNotice {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_seen")]
    pub seen: bool,
}

fn default_seen() -> bool {
    true
}

impl Default for GlobalNotice {
    fn default() -> Self {
        Self {
            message: None,
            seen: true,
        }
    }
}
