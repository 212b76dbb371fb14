//! Authentication and profile service.
//!
//! Registration and login against the stored user directory, plus the
//! profile edits (name, bio, theme) an account may make on itself.
//! Credentials never leave this service; callers only ever see [`Account`].

use oyasify_core::error::{OyasifyError, Result};
use oyasify_core::state::StateRepository;
use oyasify_core::theme;
use oyasify_core::user::{Account, AccountRepository, Role, StoredAccount};
use std::sync::Arc;
use tracing::info;

pub struct AuthService {
    accounts: Arc<dyn AccountRepository>,
    state: Arc<dyn StateRepository>,
}

impl AuthService {
    pub fn new(accounts: Arc<dyn AccountRepository>, state: Arc<dyn StateRepository>) -> Self {
        Self { accounts, state }
    }

    /// Registers a new account and logs it in.
    ///
    /// # Errors
    ///
    /// - [`OyasifyError::Auth`] when a field is missing or the e-mail is
    ///   already registered.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Account> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(OyasifyError::auth("Por favor, preencha todos os campos."));
        }
        if self.accounts.find_by_email(email).await?.is_some() {
            return Err(OyasifyError::auth("Este e-mail já está em uso."));
        }

        let id = self.next_account_id().await?;
        let entry = StoredAccount {
            account: Account {
                id,
                name: name.to_string(),
                email: email.to_string(),
                avatar_url: format!("https://i.pravatar.cc/150?u={email}"),
                bio: "Novo criador no Oyasify!".to_string(),
                role: Role::User,
                theme: theme::DEFAULT_THEME.to_string(),
                supporter: false,
            },
            password: password.to_string(),
        };
        self.accounts.save(&entry).await?;
        self.state.set_current_account(id).await?;

        info!(target: "auth", account_id = id, "registered new account");
        Ok(entry.account)
    }

    /// Logs in with e-mail and password.
    ///
    /// # Errors
    ///
    /// - [`OyasifyError::Auth`] when no entry matches both credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<Account> {
        let entry = self
            .accounts
            .find_by_email(email)
            .await?
            .filter(|e| e.password == password)
            .ok_or_else(|| OyasifyError::auth("E-mail ou senha inválidos."))?;

        self.state.set_current_account(entry.account.id).await?;
        info!(target: "auth", account_id = entry.account.id, "logged in");
        Ok(entry.account)
    }

    /// Clears the current session.
    pub async fn logout(&self) -> Result<()> {
        self.state.clear_current_account().await
    }

    /// Returns the logged-in account, if any.
    pub async fn current_account(&self) -> Result<Option<Account>> {
        let Some(id) = self.state.get_current_account().await else {
            return Ok(None);
        };
        Ok(self.accounts.find_by_id(id).await?.map(|e| e.account))
    }

    /// Updates display name and/or bio of an account.
    pub async fn update_profile(
        &self,
        account_id: u64,
        name: Option<&str>,
        bio: Option<&str>,
    ) -> Result<Account> {
        let mut entry = self.require(account_id).await?;
        if let Some(name) = name {
            entry.account.name = name.to_string();
        }
        if let Some(bio) = bio {
            entry.account.bio = bio.to_string();
        }
        self.accounts.save(&entry).await?;
        Ok(entry.account)
    }

    /// Selects a theme for an account.
    ///
    /// # Errors
    ///
    /// - [`OyasifyError::Config`] for an unknown theme key.
    /// - [`OyasifyError::SupporterOnly`] when a non-supporter selects the
    ///   supporter theme.
    pub async fn set_theme(&self, account_id: u64, theme_key: &str) -> Result<Account> {
        let mut entry = self.require(account_id).await?;
        if !theme::is_known(theme_key) {
            return Err(OyasifyError::config(format!("Unknown theme: {theme_key}")));
        }
        if !theme::is_selectable(theme_key, entry.account.supporter) {
            return Err(OyasifyError::SupporterOnly(format!(
                "theme '{theme_key}' is reserved for supporters"
            )));
        }
        entry.account.theme = theme_key.to_string();
        self.accounts.save(&entry).await?;
        Ok(entry.account)
    }

    async fn require(&self, account_id: u64) -> Result<StoredAccount> {
        self.accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| OyasifyError::not_found("account", account_id.to_string()))
    }

    async fn next_account_id(&self) -> Result<u64> {
        let entries = self.accounts.list_all().await?;
        Ok(entries
            .iter()
            .map(|e| e.account.id + 1)
            .max()
            .unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockAccountRepository, MockStateRepository};

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(MockAccountRepository::new()),
            Arc::new(MockStateRepository::new()),
        )
    }

    #[tokio::test]
    async fn register_then_login_round_trips() {
        let service = service();
        let account = service
            .register("Nova", "nova@example.com", "senha")
            .await
            .unwrap();
        assert_eq!(account.theme, theme::DEFAULT_THEME);
        assert_eq!(service.current_account().await.unwrap().unwrap().id, account.id);

        service.logout().await.unwrap();
        assert!(service.current_account().await.unwrap().is_none());

        let again = service.login("nova@example.com", "senha").await.unwrap();
        assert_eq!(again.id, account.id);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let service = service();
        service
            .register("Nova", "nova@example.com", "senha")
            .await
            .unwrap();
        let err = service
            .register("Outra", "nova@example.com", "outra")
            .await
            .unwrap_err();
        assert!(err.is_auth());
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let service = service();
        let err = service.register(" ", "a@b.c", "x").await.unwrap_err();
        assert!(err.is_auth());
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let service = service();
        service
            .register("Nova", "nova@example.com", "senha")
            .await
            .unwrap();
        let err = service.login("nova@example.com", "errada").await.unwrap_err();
        assert!(err.is_auth());
    }

    #[tokio::test]
    async fn supporter_theme_requires_supporter_status() {
        let service = service();
        let account = service
            .register("Nova", "nova@example.com", "senha")
            .await
            .unwrap();

        let err = service
            .set_theme(account.id, theme::SUPPORTER_THEME)
            .await
            .unwrap_err();
        assert!(err.is_supporter_only());

        let updated = service.set_theme(account.id, "neon").await.unwrap();
        assert_eq!(updated.theme, "neon");
    }

    #[tokio::test]
    async fn account_ids_are_unique_and_increasing() {
        let service = service();
        let a = service.register("A", "a@example.com", "x").await.unwrap();
        let b = service.register("B", "b@example.com", "x").await.unwrap();
        assert!(b.id > a.id);
    }
}
