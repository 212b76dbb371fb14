//! CLI command implementations.

pub mod account;
pub mod assistant;
pub mod chat;
pub mod friends;
pub mod studio;
pub mod supporter;

use anyhow::{Context as _, Result, anyhow};
use oyasify_application::{
    AssistantService, AuthService, ChatService, FriendService, StudioService, SupporterService,
};
use oyasify_core::user::Account;
use oyasify_infrastructure::{
    LocalStore, StoreAccountRepository, StoreChatRepository, StoreFriendRepository,
    StoreFriendRequestRepository, StoreGlobalNoticeRepository, StoreStateRepository,
    StoreSupporterRequestRepository,
};
use oyasify_interaction::{GeminiResponder, Responder};
use std::sync::Arc;

/// Shared wiring for every command: the store, repositories, and services
/// that do not need the AI responder.
pub struct Context {
    pub store: LocalStore,
    pub auth: AuthService,
    pub friends: FriendService,
    pub supporter: SupporterService,
    accounts: Arc<StoreAccountRepository>,
    chats: Arc<StoreChatRepository>,
}

impl Context {
    pub fn open() -> Result<Self> {
        let store = LocalStore::open_default().context("failed to resolve the data directory")?;

        let accounts = Arc::new(StoreAccountRepository::new(store.clone()));
        let chats = Arc::new(StoreChatRepository::new(store.clone()));
        let state = Arc::new(StoreStateRepository::new(store.clone()));
        let friends = Arc::new(StoreFriendRepository::new(store.clone()));
        let friend_requests = Arc::new(StoreFriendRequestRepository::new(store.clone()));
        let supporter_requests = Arc::new(StoreSupporterRequestRepository::new(store.clone()));
        let notice = Arc::new(StoreGlobalNoticeRepository::new(store.clone()));

        Ok(Self {
            auth: AuthService::new(accounts.clone(), state),
            friends: FriendService::new(friends, friend_requests, accounts.clone()),
            supporter: SupporterService::new(accounts.clone(), supporter_requests, notice),
            accounts,
            chats,
            store,
        })
    }

    /// The logged-in account, or an error telling the user to log in.
    pub async fn require_account(&self) -> Result<Account> {
        self.auth
            .current_account()
            .await?
            .ok_or_else(|| anyhow!("not logged in; run `oyasify login` first"))
    }

    /// Builds the AI responder from secret.json.
    pub fn responder(&self) -> Result<Arc<dyn Responder>> {
        let responder =
            GeminiResponder::try_from_config().context("failed to load the Gemini configuration")?;
        Ok(Arc::new(responder))
    }

    pub fn chat_service(&self) -> Result<ChatService> {
        Ok(ChatService::new(self.chats.clone(), self.responder()?))
    }

    pub fn assistant_service(&self) -> Result<AssistantService> {
        Ok(AssistantService::new(self.responder()?))
    }

    pub fn studio_service(&self) -> Result<StudioService> {
        Ok(StudioService::new(self.responder()?))
    }

    /// Account repository handle (used by seed output).
    pub fn accounts(&self) -> Arc<StoreAccountRepository> {
        self.accounts.clone()
    }
}
