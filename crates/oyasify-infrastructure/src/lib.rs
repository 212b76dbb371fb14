//! Oyasify infrastructure layer.
//!
//! File-backed persistence for the domain repositories: an atomic JSON
//! store standing in for the original's browser local storage, plus
//! repository implementations and seed-data installation.

pub mod local_store;
pub mod paths;
pub mod seed;
pub mod storage;

mod store_account_repository;
mod store_chat_repository;
mod store_friend_repository;
mod store_state_repository;
mod store_support_repository;

pub use local_store::LocalStore;
pub use paths::OyasifyPaths;
pub use store_account_repository::StoreAccountRepository;
pub use store_chat_repository::StoreChatRepository;
pub use store_friend_repository::{StoreFriendRepository, StoreFriendRequestRepository};
pub use store_state_repository::StoreStateRepository;
pub use store_support_repository::{StoreGlobalNoticeRepository, StoreSupporterRequestRepository};
