//! JSON key-value store backing every entity repository.
//!
//! The original application kept all state in browser local storage; this
//! is its file-system analog. Each key maps to one JSON file under the
//! data root, written atomically. Reads honor the local-storage contract:
//! any failure (missing file, corrupt JSON) falls back to the supplied
//! default and is logged, never raised.

use crate::paths::{OyasifyPaths, PathError};
use crate::storage::AtomicJsonFile;
use serde::{Serialize, de::DeserializeOwned};
use std::path::PathBuf;
use tracing::warn;

/// Well-known store keys, mirroring the original's `oyasify-*` local
/// storage keys.
pub mod keys {
    pub const USERS: &str = "users";
    pub const FRIENDS: &str = "friends";
    pub const FRIEND_REQUESTS: &str = "friend-requests";
    pub const CHATS: &str = "chats";
    pub const SUPPORTER_REQUESTS: &str = "supporter-requests";
    pub const GLOBAL_NOTICE: &str = "global-notice";
    pub const APP_STATE: &str = "app-state";
}

/// A file-backed key-value store with default-on-failure reads.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a store rooted at the platform data directory.
    pub fn open_default() -> Result<Self, PathError> {
        Ok(Self::new(OyasifyPaths::data_dir()?))
    }

    fn file<T: Serialize + DeserializeOwned>(&self, key: &str) -> AtomicJsonFile<T> {
        AtomicJsonFile::new(self.root.join(format!("{key}.json")))
    }

    /// Reads the value stored under `key`.
    ///
    /// Returns `default` when the key was never written or the stored JSON
    /// cannot be read or parsed; failures are logged and never propagate.
    pub fn get_or<T>(&self, key: &str, default: T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        match self.file::<T>(key).load() {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                warn!(target: "local_store", key, %err, "falling back to default");
                default
            }
        }
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub fn set<T>(&self, key: &str, value: &T) -> Result<(), crate::storage::AtomicJsonError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.file::<T>(key).save(value)
    }

    /// Read-modify-write under the store's file lock.
    pub fn update<T, F>(&self, key: &str, default: T, f: F) -> Result<(), crate::storage::AtomicJsonError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        self.file::<T>(key).update(default, |value| {
            f(value);
            Ok(())
        })
    }
}
