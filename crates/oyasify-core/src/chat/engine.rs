//! Chat turn engine.
//!
//! The transition function for a friend chat with AI takeover. A chat is
//! normally human-to-human; mentioning the AI pulls it into the
//! conversation, after which every message is routed to it until the stop
//! command hands the chat back.
//!
//! The engine is pure domain logic split in two phases around the one
//! suspension point (the AI call):
//!
//! 1. [`begin_turn`] appends the outgoing message, applies the stop/mention
//!    rules and reports whether the AI must be queried (and with what
//!    prompt).
//! 2. [`complete_turn`] appends the AI reply and marks the AI active.
//!
//! The caller owns the actual AI invocation and always resolves it to a
//! value (real reply or the fixed apology) before calling `complete_turn`,
//! so the session can never be left between states.

use once_cell::sync::Lazy;
use regex::Regex;

use super::message::{Draft, MessageKind, Sender};
use super::model::ChatSession;
use crate::error::{OyasifyError, Result};

/// Mention token that pulls the AI into a chat, matched case-insensitively.
pub const MENTION_TOKEN: &str = "@oyasifyai";

/// Command that hands the chat back to humans.
pub const STOP_COMMAND: &str = "/parar";

/// Notice appended when the AI joins a chat.
pub const AI_JOINED_NOTICE: &str = "Oyasify AI entrou do chat.";

/// Notice appended when the AI leaves a chat.
pub const AI_LEFT_NOTICE: &str = "Oyasify AI saiu do chat.";

/// Fixed reply used when the AI responder fails or is unreachable.
pub const AI_APOLOGY: &str = "Desculpe, ocorreu um erro ao processar sua solicitação.";

static MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@oyasifyai").expect("mention pattern is valid"));

/// Outcome of [`begin_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPlan {
    /// The turn is finished; no AI call is needed.
    Done,
    /// The AI must be queried with `prompt`; the caller resolves the call
    /// and feeds the reply to [`complete_turn`].
    QueryAi { prompt: String },
}

impl TurnPlan {
    /// True when the plan requires an AI call.
    pub fn needs_ai(&self) -> bool {
        matches!(self, TurnPlan::QueryAi { .. })
    }
}

/// Applies an outgoing user message to the session.
///
/// The message is always appended first (optimistic local echo), before any
/// AI decision. Only text messages participate in the AI control rules;
/// media messages are plain appends.
///
/// Rule order (stop always wins and short-circuits):
/// - `/parar` while the AI is active appends [`AI_LEFT_NOTICE`] and
///   deactivates it. `/parar` while inactive is a plain message.
/// - A message mentioning [`MENTION_TOKEN`] queries the AI; if the AI was
///   inactive, [`AI_JOINED_NOTICE`] is appended before the call. A mention
///   while already active is a pure continuation (no duplicate notice).
/// - Any other message while the AI is active queries it again.
///
/// # Errors
///
/// Returns [`OyasifyError::EmptyMessage`] for a text draft with no
/// non-whitespace content; the session is left untouched.
pub fn begin_turn(session: &mut ChatSession, draft: Draft) -> Result<TurnPlan> {
    if draft.kind == MessageKind::Text
        && draft.content.as_deref().unwrap_or_default().trim().is_empty()
    {
        return Err(OyasifyError::EmptyMessage);
    }

    let text = match draft.kind {
        MessageKind::Text => draft.content.clone().unwrap_or_default(),
        _ => String::new(),
    };
    let is_text = draft.kind == MessageKind::Text;

    session.append(draft, Sender::Me);

    if !is_text {
        return Ok(TurnPlan::Done);
    }

    let normalized = text.to_lowercase();
    let mention = MENTION.is_match(&text);
    let stop = normalized == STOP_COMMAND;

    if stop && session.ai_active {
        session.append_system(AI_LEFT_NOTICE);
        session.ai_active = false;
        return Ok(TurnPlan::Done);
    }

    let should_query = (session.ai_active && !stop) || mention;
    if !should_query {
        return Ok(TurnPlan::Done);
    }

    if mention && !session.ai_active {
        session.append_system(AI_JOINED_NOTICE);
    }

    let prompt = MENTION.replace_all(&text, "").trim().to_string();
    Ok(TurnPlan::QueryAi { prompt })
}

/// Applies the resolved AI reply to the session.
///
/// Appends exactly one AI-authored text message and activates the AI flag
/// (idempotent when already active). The reply may be the fixed
/// [`AI_APOLOGY`]; the engine treats it like any other reply so a failed
/// call still advances the session.
pub fn complete_turn(session: &mut ChatSession, reply: impl Into<String>) {
    session.append(Draft::text(reply.into()), Sender::Ai);
    session.ai_active = true;
}
