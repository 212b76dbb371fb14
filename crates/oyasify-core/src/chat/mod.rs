//! Chat domain module.
//!
//! This module contains the friend-chat domain models, the turn engine
//! implementing the AI takeover rules, and the repository interface.
//!
//! # Module Structure
//!
//! - `message`: Message types (`MessageKind`, `Sender`, `Message`, `Draft`)
//! - `model`: Chat session aggregate (`ChatSession`)
//! - `engine`: The turn transition function (`begin_turn`/`complete_turn`)
//! - `repository`: Repository trait for chat persistence

mod engine;
mod message;
mod model;
mod repository;

pub use engine::{
    AI_APOLOGY, AI_JOINED_NOTICE, AI_LEFT_NOTICE, MENTION_TOKEN, STOP_COMMAND, TurnPlan,
    begin_turn, complete_turn,
};
pub use message::{Draft, Message, MessageKind, Sender};
pub use model::ChatSession;
pub use repository::ChatRepository;
