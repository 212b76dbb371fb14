//! Application state domain model.
//!
//! Application-level state that persists across restarts, next to (not
//! inside) the entity stores.

use serde::{Deserialize, Serialize};

/// Application state that persists across restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Currently logged-in account id, if any.
    #[serde(default)]
    pub current_account_id: Option<u64>,
    /// Whether initial seed data has been installed.
    #[serde(default)]
    pub seeded: bool,
}
