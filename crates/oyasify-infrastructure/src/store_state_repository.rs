//! Application state repository implementation.
//!
//! Reads and writes application state through the local store and caches it
//! in memory to avoid repeated file I/O.

use crate::local_store::{LocalStore, keys};
use async_trait::async_trait;
use oyasify_core::error::{OyasifyError, Result};
use oyasify_core::state::{AppState, StateRepository};
use std::sync::Arc;
use tokio::sync::Mutex;

/// `StateRepository` backed by the `app-state` key of the local store.
#[derive(Clone)]
pub struct StoreStateRepository {
    /// Cached app state loaded from storage.
    state: Arc<Mutex<AppState>>,
    store: LocalStore,
}

impl StoreStateRepository {
    /// Creates the repository and loads the initial state (default when the
    /// store has none).
    pub fn new(store: LocalStore) -> Self {
        let initial = store.get_or(keys::APP_STATE, AppState::default());
        Self {
            state: Arc::new(Mutex::new(initial)),
            store,
        }
    }

    async fn persist(&self, state: AppState) -> Result<()> {
        // Update in-memory cache first
        {
            let mut cached = self.state.lock().await;
            *cached = state.clone();
        }

        let store = self.store.clone();
        tokio::task::spawn_blocking(move || {
            store
                .set(keys::APP_STATE, &state)
                .map_err(|e| OyasifyError::data_access(format!("Failed to save app state: {e}")))
        })
        .await
        .map_err(|e| OyasifyError::internal(format!("Failed to join task: {e}")))?
    }
}

#[async_trait]
impl StateRepository for StoreStateRepository {
    async fn get_state(&self) -> Result<AppState> {
        Ok(self.state.lock().await.clone())
    }

    async fn save_state(&self, state: AppState) -> Result<()> {
        self.persist(state).await
    }

    async fn get_current_account(&self) -> Option<u64> {
        self.state.lock().await.current_account_id
    }

    async fn set_current_account(&self, account_id: u64) -> Result<()> {
        let mut state = self.state.lock().await.clone();
        state.current_account_id = Some(account_id);
        self.persist(state).await
    }

    async fn clear_current_account(&self) -> Result<()> {
        let mut state = self.state.lock().await.clone();
        state.current_account_id = None;
        self.persist(state).await
    }
}
