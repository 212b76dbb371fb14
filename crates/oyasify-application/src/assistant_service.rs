//! Oyasify AI assistant service.
//!
//! The standalone assistant chat (separate from friend chats): every
//! message goes straight to the AI, image attachments are forwarded, and
//! the `/gerar` / `/imagine` commands request image generation instead of a
//! text reply. The transcript is in-memory only; the original never
//! persists it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use chrono::Utc;
use oyasify_core::chat::{AI_APOLOGY, Message, MessageKind, Sender};
use oyasify_core::error::{OyasifyError, Result};
use oyasify_interaction::Responder;
use oyasify_interaction::responder::Attachment;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

/// Opening message shown before the user says anything.
pub const GREETING: &str = "Olá! Eu sou o Oyasify AI. Posso te ajudar com ideias, responder perguntas e até gerar imagens! Use /gerar <sua ideia>.";

/// Fixed reply when image generation yields nothing.
pub const IMAGE_FAILURE: &str = "Desculpe, não consegui gerar a imagem. Tente novamente.";

struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    fn push(
        &mut self,
        kind: MessageKind,
        content: Option<String>,
        media_url: Option<String>,
        sender: Sender,
    ) -> Message {
        let timestamp = match sender {
            Sender::Ai if self.messages.is_empty() => String::new(),
            _ => Utc::now().format("%H:%M").to_string(),
        };
        let message = Message {
            id: self.next_id,
            kind,
            content,
            media_url,
            sender,
            timestamp,
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }
}

pub struct AssistantService {
    responder: Arc<dyn Responder>,
    transcript: Mutex<Transcript>,
}

impl AssistantService {
    /// Creates the assistant with its greeting already in the transcript.
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        let mut transcript = Transcript {
            messages: Vec::new(),
            next_id: 0,
        };
        transcript.push(
            MessageKind::Text,
            Some(GREETING.to_string()),
            None,
            Sender::Ai,
        );
        Self {
            responder,
            transcript: Mutex::new(transcript),
        }
    }

    /// Current transcript snapshot.
    pub async fn transcript(&self) -> Vec<Message> {
        self.transcript.lock().await.messages.clone()
    }

    /// Sends a message to the assistant and returns the AI's reply message.
    ///
    /// `/gerar <prompt>` and `/imagine <prompt>` request an image; anything
    /// else is a text turn with `attachments` forwarded to the AI. Failures
    /// degrade to fixed reply texts, never errors.
    ///
    /// # Errors
    ///
    /// - [`OyasifyError::EmptyMessage`] for blank input.
    pub async fn send(&self, text: &str, attachments: Vec<Attachment>) -> Result<Message> {
        if text.trim().is_empty() {
            return Err(OyasifyError::EmptyMessage);
        }

        let mut transcript = self.transcript.lock().await;
        transcript.push(
            MessageKind::Text,
            Some(text.to_string()),
            None,
            Sender::Me,
        );

        let reply = if let Some(prompt) = image_prompt(text) {
            match self.responder.generate_image(prompt).await {
                Ok(Some(bytes)) => {
                    let data_uri =
                        format!("data:image/png;base64,{}", BASE64_STANDARD.encode(bytes));
                    transcript.push(MessageKind::Image, None, Some(data_uri), Sender::Ai)
                }
                Ok(None) => transcript.push(
                    MessageKind::Text,
                    Some(IMAGE_FAILURE.to_string()),
                    None,
                    Sender::Ai,
                ),
                Err(err) => {
                    warn!(target: "assistant", %err, "image generation failed");
                    transcript.push(
                        MessageKind::Text,
                        Some(IMAGE_FAILURE.to_string()),
                        None,
                        Sender::Ai,
                    )
                }
            }
        } else {
            let text_reply = match self.responder.generate_text(text, &attachments).await {
                Ok(reply) => reply,
                Err(err) => {
                    warn!(target: "assistant", %err, "text generation failed");
                    AI_APOLOGY.to_string()
                }
            };
            transcript.push(MessageKind::Text, Some(text_reply), None, Sender::Ai)
        };

        Ok(reply)
    }
}

/// Extracts the image prompt when `text` starts with an image command.
fn image_prompt(text: &str) -> Option<&str> {
    let lower = text.to_lowercase();
    if lower.starts_with("/gerar ") {
        Some(text[7..].trim())
    } else if lower.starts_with("/imagine ") {
        Some(text[9..].trim())
    } else {
        None
    }
}
