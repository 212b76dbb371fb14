//! Chat message types.
//!
//! This module contains types for representing messages in a friend chat,
//! including media kinds and sender identity.

use serde::{Deserialize, Serialize};

/// The kind of content a message carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Plain text message.
    Text,
    /// Image attachment, referenced by `media_url`.
    Image,
    /// Video attachment, referenced by `media_url`.
    Video,
    /// Voice note, referenced by `media_url`.
    Audio,
    /// Chat-level notice (AI joined/left), rendered inline.
    System,
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Sender {
    /// The local account.
    Me,
    /// The friend on the other side of the chat.
    Friend(u64),
    /// The Oyasify AI responder.
    Ai,
}

/// A single message in a chat's append-only log.
///
/// Messages are immutable once appended; `id` is an ordinal unique within
/// its session, assigned by the session when the message is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Ordinal identifier, unique within the owning session.
    pub id: u64,
    /// Content kind.
    pub kind: MessageKind,
    /// Text body. `None` for pure media messages.
    #[serde(default)]
    pub content: Option<String>,
    /// Reference to attached media (data URI or file path).
    #[serde(default)]
    pub media_url: Option<String>,
    /// Message author.
    pub sender: Sender,
    /// Display timestamp (e.g. "14:03"). Empty for system messages.
    pub timestamp: String,
}

impl Message {
    /// Returns the lowercased text content, or an empty string for
    /// non-text messages.
    pub fn normalized_text(&self) -> String {
        match self.kind {
            MessageKind::Text => self
                .content
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
            _ => String::new(),
        }
    }
}

/// A message the local user is about to send, before the session has
/// assigned it an ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub kind: MessageKind,
    pub content: Option<String>,
    pub media_url: Option<String>,
}

impl Draft {
    /// A plain text draft.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Text,
            content: Some(content.into()),
            media_url: None,
        }
    }

    /// A media draft (image, video or audio).
    pub fn media(kind: MessageKind, media_url: impl Into<String>) -> Self {
        Self {
            kind,
            content: None,
            media_url: Some(media_url.into()),
        }
    }
}
