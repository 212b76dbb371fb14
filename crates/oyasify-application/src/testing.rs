//! Shared mocks for service tests.

use async_trait::async_trait;
use oyasify_core::chat::{ChatRepository, ChatSession};
use oyasify_core::error::Result;
use oyasify_core::friend::{Friend, FriendRepository, FriendRequest, FriendRequestRepository};
use oyasify_core::state::{AppState, StateRepository};
use oyasify_core::support::{
    GlobalNotice, GlobalNoticeRepository, SupporterRequest, SupporterRequestRepository,
};
use oyasify_core::user::{AccountRepository, StoredAccount};
use oyasify_interaction::responder::Attachment;
use oyasify_interaction::{Responder, ResponderError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

// Mock ChatRepository
pub struct MockChatRepository {
    pub sessions: Mutex<HashMap<u64, ChatSession>>,
}

impl MockChatRepository {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ChatRepository for MockChatRepository {
    async fn find_by_friend(&self, friend_id: u64) -> Result<Option<ChatSession>> {
        Ok(self.sessions.lock().unwrap().get(&friend_id).cloned())
    }

    async fn save(&self, session: &ChatSession) -> Result<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.friend_id, session.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ChatSession>> {
        Ok(self.sessions.lock().unwrap().values().cloned().collect())
    }
}

// Mock AccountRepository
pub struct MockAccountRepository {
    pub entries: Mutex<Vec<StoredAccount>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_entries(entries: Vec<StoredAccount>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn list_all(&self) -> Result<Vec<StoredAccount>> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn find_by_id(&self, account_id: u64) -> Result<Option<StoredAccount>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.account.id == account_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoredAccount>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.account.email == email)
            .cloned())
    }

    async fn save(&self, entry: &StoredAccount) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|e| e.account.id == entry.account.id) {
            Some(slot) => *slot = entry.clone(),
            None => entries.push(entry.clone()),
        }
        Ok(())
    }
}

// Mock StateRepository
pub struct MockStateRepository {
    pub state: Mutex<AppState>,
}

impl MockStateRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(AppState::default()),
        }
    }
}

#[async_trait]
impl StateRepository for MockStateRepository {
    async fn get_state(&self) -> Result<AppState> {
        Ok(self.state.lock().unwrap().clone())
    }

    async fn save_state(&self, state: AppState) -> Result<()> {
        *self.state.lock().unwrap() = state;
        Ok(())
    }

    async fn get_current_account(&self) -> Option<u64> {
        self.state.lock().unwrap().current_account_id
    }

    async fn set_current_account(&self, account_id: u64) -> Result<()> {
        self.state.lock().unwrap().current_account_id = Some(account_id);
        Ok(())
    }

    async fn clear_current_account(&self) -> Result<()> {
        self.state.lock().unwrap().current_account_id = None;
        Ok(())
    }
}

// Mock FriendRepository
pub struct MockFriendRepository {
    pub friends: Mutex<Vec<Friend>>,
}

impl MockFriendRepository {
    pub fn new() -> Self {
        Self {
            friends: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FriendRepository for MockFriendRepository {
    async fn list_all(&self) -> Result<Vec<Friend>> {
        Ok(self.friends.lock().unwrap().clone())
    }

    async fn find_by_id(&self, friend_id: u64) -> Result<Option<Friend>> {
        Ok(self
            .friends
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == friend_id)
            .cloned())
    }

    async fn save(&self, friend: &Friend) -> Result<()> {
        let mut friends = self.friends.lock().unwrap();
        match friends.iter_mut().find(|f| f.id == friend.id) {
            Some(slot) => *slot = friend.clone(),
            None => friends.push(friend.clone()),
        }
        Ok(())
    }
}

// Mock FriendRequestRepository
pub struct MockFriendRequestRepository {
    pub requests: Mutex<Vec<FriendRequest>>,
}

impl MockFriendRequestRepository {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FriendRequestRepository for MockFriendRequestRepository {
    async fn list_all(&self) -> Result<Vec<FriendRequest>> {
        Ok(self.requests.lock().unwrap().clone())
    }

    async fn save(&self, request: &FriendRequest) -> Result<()> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn delete(&self, from_id: u64, to_id: u64) -> Result<()> {
        self.requests
            .lock()
            .unwrap()
            .retain(|r| !(r.from_id == from_id && r.to_id == to_id));
        Ok(())
    }
}

// Mock SupporterRequestRepository
pub struct MockSupporterRequestRepository {
    pub requests: Mutex<Vec<SupporterRequest>>,
}

impl MockSupporterRequestRepository {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SupporterRequestRepository for MockSupporterRequestRepository {
    async fn list_all(&self) -> Result<Vec<SupporterRequest>> {
        Ok(self.requests.lock().unwrap().clone())
    }

    async fn save(&self, request: &SupporterRequest) -> Result<()> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn delete(&self, user_id: u64) -> Result<()> {
        self.requests.lock().unwrap().retain(|r| r.user_id != user_id);
        Ok(())
    }
}

// Mock GlobalNoticeRepository
pub struct MockGlobalNoticeRepository {
    pub notice: Mutex<GlobalNotice>,
}

impl MockGlobalNoticeRepository {
    pub fn new() -> Self {
        Self {
            notice: Mutex::new(GlobalNotice::default()),
        }
    }
}

#[async_trait]
impl GlobalNoticeRepository for MockGlobalNoticeRepository {
    async fn get(&self) -> Result<GlobalNotice> {
        Ok(self.notice.lock().unwrap().clone())
    }

    async fn set(&self, notice: &GlobalNotice) -> Result<()> {
        *self.notice.lock().unwrap() = notice.clone();
        Ok(())
    }
}

// Mock Responder with scripted replies and call recording
pub struct MockResponder {
    pub text_replies: Mutex<Vec<std::result::Result<String, ResponderError>>>,
    pub image_replies: Mutex<Vec<std::result::Result<Option<Vec<u8>>, ResponderError>>>,
    /// Recorded (prompt, attachment count) per text call.
    pub text_calls: Mutex<Vec<(String, usize)>>,
    /// Recorded prompt per image call.
    pub image_calls: Mutex<Vec<String>>,
    pub delay: Duration,
}

impl MockResponder {
    pub fn new() -> Self {
        Self {
            text_replies: Mutex::new(Vec::new()),
            image_replies: Mutex::new(Vec::new()),
            text_calls: Mutex::new(Vec::new()),
            image_calls: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    pub fn with_text_replies(replies: Vec<std::result::Result<String, ResponderError>>) -> Self {
        let responder = Self::new();
        *responder.text_replies.lock().unwrap() = replies;
        responder
    }

    pub fn with_image_replies(
        replies: Vec<std::result::Result<Option<Vec<u8>>, ResponderError>>,
    ) -> Self {
        let responder = Self::new();
        *responder.image_replies.lock().unwrap() = replies;
        responder
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl Responder for MockResponder {
    async fn generate_text(
        &self,
        prompt: &str,
        attachments: &[Attachment],
    ) -> std::result::Result<String, ResponderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.text_calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), attachments.len()));
        let mut replies = self.text_replies.lock().unwrap();
        if replies.is_empty() {
            Ok("ok".to_string())
        } else {
            replies.remove(0)
        }
    }

    async fn generate_image(
        &self,
        prompt: &str,
    ) -> std::result::Result<Option<Vec<u8>>, ResponderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.image_calls.lock().unwrap().push(prompt.to_string());
        let mut replies = self.image_replies.lock().unwrap();
        if replies.is_empty() {
            Ok(None)
        } else {
            replies.remove(0)
        }
    }
}
