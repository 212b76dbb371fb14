//! Oyasify AI interaction layer.
//!
//! The boundary between the application and the generative AI provider:
//! the [`Responder`] trait, its Gemini/Imagen REST implementation, prompt
//! templates for the studio generators, and secret loading.

pub mod config;
pub mod error;
pub mod gemini;
pub mod imagen;
pub mod prompts;
pub mod responder;

pub use error::ResponderError;
pub use gemini::GeminiResponder;
pub use responder::{Attachment, Responder};
