//! Chat session domain model.
//!
//! This module contains the core `ChatSession` entity that represents the
//! persisted conversation between the local user and one friend.

use super::message::{Draft, Message, MessageKind, Sender};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Persisted conversation state between the local user and one friend.
///
/// A session contains:
/// - The friend this conversation belongs to
/// - An append-only, chronological message log
/// - Whether the AI responder currently participates in the chat
///
/// One session exists per friendship, created lazily on first open.
/// `ai_active` is the only mutable scalar and is flipped exclusively by the
/// turn engine; `messages` only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Identifier of the friend on the other side.
    pub friend_id: u64,
    /// Ordered message log (append-only, chronological).
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Whether the AI responder is participating in this chat.
    #[serde(default)]
    pub ai_active: bool,
    /// Next message ordinal to assign.
    #[serde(default)]
    next_message_id: u64,
}

impl ChatSession {
    /// Creates an empty session for a friend.
    pub fn new(friend_id: u64) -> Self {
        Self {
            friend_id,
            messages: Vec::new(),
            ai_active: false,
            next_message_id: 0,
        }
    }

    /// Rebuilds a session from an existing message log (seed data,
    /// imports). The ordinal counter resumes after the highest id present.
    pub fn from_messages(friend_id: u64, messages: Vec<Message>) -> Self {
        let next_message_id = messages.iter().map(|m| m.id + 1).max().unwrap_or(0);
        Self {
            friend_id,
            messages,
            ai_active: false,
            next_message_id,
        }
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no message has been exchanged yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recently appended message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Appends a message authored by `sender`, assigning the next ordinal.
    ///
    /// Returns the assigned ordinal.
    pub(crate) fn append(&mut self, draft: Draft, sender: Sender) -> u64 {
        // Snapshots predating the counter field deserialize it as 0; never
        // hand out an ordinal already present in the log.
        let id = self
            .next_message_id
            .max(self.messages.iter().map(|m| m.id + 1).max().unwrap_or(0));
        self.next_message_id = id + 1;
        let timestamp = match draft.kind {
            MessageKind::System => String::new(),
            _ => Utc::now().format("%H:%M").to_string(),
        };
        self.messages.push(Message {
            id,
            kind: draft.kind,
            content: draft.content,
            media_url: draft.media_url,
            sender,
            timestamp,
        });
        id
    }

    /// Appends a system notice (AI joined/left the chat).
    pub(crate) fn append_system(&mut self, content: &str) -> u64 {
        self.append(
            Draft {
                kind: MessageKind::System,
                content: Some(content.to_string()),
                media_url: None,
            },
            Sender::Ai,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_assigns_increasing_ordinals() {
        let mut session = ChatSession::new(1);
        let a = session.append(Draft::text("one"), Sender::Me);
        let b = session.append(Draft::text("two"), Sender::Friend(1));
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn system_messages_have_empty_timestamp() {
        let mut session = ChatSession::new(1);
        session.append_system("Oyasify AI entrou do chat.");
        let msg = session.last_message().unwrap();
        assert_eq!(msg.kind, MessageKind::System);
        assert_eq!(msg.sender, Sender::Ai);
        assert!(msg.timestamp.is_empty());
    }

    #[test]
    fn from_messages_resumes_ordinals_after_the_log() {
        let mut session = ChatSession::new(3);
        session.append(Draft::text("bora fazer uma collab?"), Sender::Friend(3));
        let rebuilt = ChatSession::from_messages(3, session.messages.clone());

        let mut rebuilt = rebuilt;
        let id = rebuilt.append(Draft::text("bora!"), Sender::Me);
        assert_eq!(id, 1);
    }

    #[test]
    fn serde_round_trip_preserves_log_and_flag() {
        let mut session = ChatSession::new(7);
        session.append(Draft::text("oi"), Sender::Me);
        session.append(Draft::text("olá"), Sender::Friend(7));
        session.ai_active = true;

        let json = serde_json::to_string(&session).unwrap();
        let restored: ChatSession = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, session);
        assert!(restored.ai_active);
        assert_eq!(restored.messages.len(), 2);
    }
}
