//! Oyasify domain layer.
//!
//! Pure domain models and logic for the Oyasify creator community: friend
//! chats with AI takeover, the user directory, friend requests, and the
//! supporter workflow. No I/O lives here; persistence and the AI responder
//! are reached through the traits each module exports.

pub mod chat;
pub mod error;
pub mod friend;
pub mod state;
pub mod support;
pub mod theme;
pub mod user;

// Re-export common error type
pub use error::OyasifyError;
