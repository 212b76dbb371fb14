//! Studio service: script and lyrics generation.
//!
//! Wraps the responder with the studio prompt templates. Failures resolve
//! to fixed HTML fragments so the caller always has something to render.
//! The script generator is a supporter perk; lyrics are open to everyone.

use oyasify_core::error::{OyasifyError, Result};
use oyasify_core::user::Account;
use oyasify_interaction::{Responder, ResponderError, prompts};
use std::sync::Arc;
use tracing::warn;

/// Shown when the provider completed but produced no script text.
pub const SCRIPT_EMPTY_FALLBACK: &str = "<p>Não foi possível gerar um roteiro. Tente novamente.</p>";

/// Shown when the script request failed outright.
pub const SCRIPT_ERROR_FALLBACK: &str =
    "<h2>Erro ao gerar o roteiro</h2><p>Não foi possível se conectar à IA. Verifique o console para mais detalhes.</p>";

/// Shown when the lyrics request failed.
pub const LYRICS_ERROR_FALLBACK: &str =
    "<h2>Erro ao gerar a letra</h2><p>Não foi possível gerar a letra. Por favor, tente novamente.</p>";

pub struct StudioService {
    responder: Arc<dyn Responder>,
}

impl StudioService {
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self { responder }
    }

    /// Generates a video script for the account's idea.
    ///
    /// # Errors
    ///
    /// - [`OyasifyError::SupporterOnly`] for non-supporter accounts.
    /// - [`OyasifyError::EmptyMessage`] for a blank idea.
    pub async fn generate_script(&self, account: &Account, idea: &str) -> Result<String> {
        if !account.supporter {
            return Err(OyasifyError::SupporterOnly(
                "script generation is a supporter perk".to_string(),
            ));
        }
        if idea.trim().is_empty() {
            return Err(OyasifyError::EmptyMessage);
        }

        let prompt = prompts::script_prompt(idea);
        match self.responder.generate_text(&prompt, &[]).await {
            Ok(script) => Ok(script),
            Err(ResponderError::InvalidResponse(err)) => {
                warn!(target: "studio", %err, "script generation returned no text");
                Ok(SCRIPT_EMPTY_FALLBACK.to_string())
            }
            Err(err) => {
                warn!(target: "studio", %err, "script generation failed");
                Ok(SCRIPT_ERROR_FALLBACK.to_string())
            }
        }
    }

    /// Generates song lyrics for the idea, optionally in a named style
    /// ("Remix" switches the prompt into parody mode).
    ///
    /// # Errors
    ///
    /// - [`OyasifyError::EmptyMessage`] for a blank idea.
    pub async fn generate_lyrics(&self, idea: &str, style: Option<&str>) -> Result<String> {
        if idea.trim().is_empty() {
            return Err(OyasifyError::EmptyMessage);
        }

        let prompt = prompts::lyrics_prompt(idea, style);
        match self.responder.generate_text(&prompt, &[]).await {
            Ok(lyrics) => Ok(lyrics),
            Err(err) => {
                warn!(target: "studio", %err, "lyrics generation failed");
                Ok(LYRICS_ERROR_FALLBACK.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockResponder;
    use oyasify_core::theme::DEFAULT_THEME;
    use oyasify_core::user::Role;

    fn account(supporter: bool) -> Account {
        Account {
            id: 1,
            name: "Casey".to_string(),
            email: "casey@example.com".to_string(),
            avatar_url: String::new(),
            bio: String::new(),
            role: Role::User,
            theme: DEFAULT_THEME.to_string(),
            supporter,
        }
    }

    #[tokio::test]
    async fn script_requires_supporter() {
        let service = StudioService::new(Arc::new(MockResponder::new()));
        let err = service
            .generate_script(&account(false), "uma ideia")
            .await
            .unwrap_err();
        assert!(err.is_supporter_only());
    }

    #[tokio::test]
    async fn script_embeds_the_idea_into_the_prompt() {
        let responder = Arc::new(MockResponder::with_text_replies(vec![Ok(
            "<h2>Roteiro</h2>".to_string()
        )]));
        let service = StudioService::new(responder.clone());

        let script = service
            .generate_script(&account(true), "3 dicas para viajar barato")
            .await
            .unwrap();
        assert_eq!(script, "<h2>Roteiro</h2>");

        let calls = responder.text_calls.lock().unwrap();
        assert!(calls[0].0.contains("3 dicas para viajar barato"));
        assert_eq!(calls[0].1, 0);
    }

    #[tokio::test]
    async fn script_failure_yields_fixed_html() {
        let responder = Arc::new(MockResponder::with_text_replies(vec![Err(
            ResponderError::Transport {
                message: "offline".to_string(),
                is_retryable: true,
            },
        )]));
        let service = StudioService::new(responder);

        let script = service
            .generate_script(&account(true), "ideia")
            .await
            .unwrap();
        assert_eq!(script, SCRIPT_ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn script_empty_response_yields_softer_fallback() {
        let responder = Arc::new(MockResponder::with_text_replies(vec![Err(
            ResponderError::InvalidResponse("no candidates".to_string()),
        )]));
        let service = StudioService::new(responder);

        let script = service
            .generate_script(&account(true), "ideia")
            .await
            .unwrap();
        assert_eq!(script, SCRIPT_EMPTY_FALLBACK);
    }

    #[tokio::test]
    async fn lyrics_are_open_to_everyone_and_carry_the_style() {
        let responder = Arc::new(MockResponder::with_text_replies(vec![Ok(
            "<h2>Letra</h2>".to_string()
        )]));
        let service = StudioService::new(responder.clone());

        let lyrics = service
            .generate_lyrics("Uzumaki", Some("Remix"))
            .await
            .unwrap();
        assert_eq!(lyrics, "<h2>Letra</h2>");

        let calls = responder.text_calls.lock().unwrap();
        assert!(calls[0].0.contains("no estilo Remix"));
    }

    #[tokio::test]
    async fn lyrics_failure_yields_fixed_html() {
        let responder = Arc::new(MockResponder::with_text_replies(vec![Err(
            ResponderError::Transport {
                message: "offline".to_string(),
                is_retryable: false,
            },
        )]));
        let service = StudioService::new(responder);

        let lyrics = service.generate_lyrics("ideia", None).await.unwrap();
        assert_eq!(lyrics, LYRICS_ERROR_FALLBACK);
    }
}
