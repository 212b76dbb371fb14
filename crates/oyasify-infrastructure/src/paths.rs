//! Unified path management for Oyasify storage.
//!
//! All persistent entity stores live as JSON files under one data root,
//! which defaults to `~/.local/share/oyasify` and can be overridden (tests
//! point it at a temp directory).
//!
//! # Directory Structure
//!
//! ```text
//! ~/.local/share/oyasify/      # Data root
//! ├── users.json               # User directory
//! ├── friends.json             # Friend list
//! ├── friend-requests.json     # Pending friend requests
//! ├── chats.json               # Chat sessions keyed by friend
//! ├── supporter-requests.json  # Pending supporter requests
//! ├── global-notice.json       # Owner broadcast
//! └── app-state.json           # Application state
//!
//! ~/.config/oyasify/           # Config directory
//! └── secret.json              # API keys
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Oyasify.
pub struct OyasifyPaths;

impl OyasifyPaths {
    /// Returns the Oyasify data directory (e.g. `~/.local/share/oyasify/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("oyasify"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the Oyasify configuration directory (e.g. `~/.config/oyasify/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("oyasify"))
            .ok_or(PathError::HomeDirNotFound)
    }
}
