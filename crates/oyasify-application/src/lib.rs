//! Oyasify application layer.
//!
//! Services orchestrating the domain around the repositories and the AI
//! responder: friend chats with AI takeover, the standalone assistant, the
//! studio generators, authentication, friends, and the supporter workflow.

pub mod assistant_service;
pub mod auth_service;
pub mod chat_service;
pub mod friend_service;
pub mod studio_service;
pub mod supporter_service;

#[cfg(test)]
pub(crate) mod testing;

pub use assistant_service::AssistantService;
pub use auth_service::AuthService;
pub use chat_service::ChatService;
pub use friend_service::FriendService;
pub use studio_service::StudioService;
pub use supporter_service::SupporterService;
