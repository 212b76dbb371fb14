//! The AI responder boundary.
//!
//! Everything above this crate talks to the generative AI provider through
//! the [`Responder`] trait: one fallible, latency-bearing call per
//! operation, no retry policy. Implementations live next to it
//! ([`crate::GeminiResponder`]); tests substitute mocks.

use crate::error::ResponderError;
use async_trait::async_trait;

/// An image payload attached to a text generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl Attachment {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Loads an attachment from disk, guessing the MIME type from the
    /// file extension.
    pub async fn from_path(path: &std::path::Path) -> Result<Self, ResponderError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ResponderError::Request(format!("failed to read attachment: {e}")))?;
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();
        Ok(Self { bytes, mime_type })
    }
}

/// A black-box generative AI service.
///
/// Both operations are single-attempt: a failure is returned, never
/// retried internally, and never panics across the boundary.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Generates a text completion for `prompt`, optionally grounded on
    /// inline image attachments.
    async fn generate_text(
        &self,
        prompt: &str,
        attachments: &[Attachment],
    ) -> Result<String, ResponderError>;

    /// Generates a single image for `prompt`.
    ///
    /// Returns `Ok(None)` when the provider completes without producing an
    /// image, which callers render as a fixed failure message.
    async fn generate_image(&self, prompt: &str) -> Result<Option<Vec<u8>>, ResponderError>;
}
