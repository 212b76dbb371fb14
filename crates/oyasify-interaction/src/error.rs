//! Responder error type.

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by an AI responder implementation.
///
/// Callers are expected to degrade gracefully on any of these (the chat
/// service substitutes a fixed apology reply); the retryability split
/// exists for logging and for callers that choose to surface it.
#[derive(Error, Debug)]
pub enum ResponderError {
    /// The request never completed (connect failure, timeout).
    #[error("AI request failed: {message}")]
    Transport { message: String, is_retryable: bool },

    /// The provider answered with a non-success status.
    #[error("AI provider error ({status_code}): {message}")]
    Provider {
        status_code: u16,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    /// The provider answered successfully but the payload was unusable.
    #[error("AI response invalid: {0}")]
    InvalidResponse(String),

    /// Local failure preparing the request (attachment load, config).
    #[error("AI request could not be built: {0}")]
    Request(String),
}

impl ResponderError {
    /// True when retrying the same call might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { is_retryable, .. } | Self::Provider { is_retryable, .. } => {
                *is_retryable
            }
            Self::InvalidResponse(_) | Self::Request(_) => false,
        }
    }

    /// Provider-suggested backoff, when one was given.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Provider { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}
