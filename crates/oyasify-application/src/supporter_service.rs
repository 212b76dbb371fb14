//! Supporter workflow service.
//!
//! Regular accounts file supporter requests; the owner reviews them,
//! grants or revokes supporter status, and can broadcast a global notice.

use oyasify_core::error::{OyasifyError, Result};
use oyasify_core::support::{
    GlobalNotice, GlobalNoticeRepository, SupporterRequest, SupporterRequestRepository,
};
use oyasify_core::user::{Account, AccountRepository};
use std::sync::Arc;
use tracing::info;

pub struct SupporterService {
    accounts: Arc<dyn AccountRepository>,
    requests: Arc<dyn SupporterRequestRepository>,
    notice: Arc<dyn GlobalNoticeRepository>,
}

impl SupporterService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        requests: Arc<dyn SupporterRequestRepository>,
        notice: Arc<dyn GlobalNoticeRepository>,
    ) -> Self {
        Self {
            accounts,
            requests,
            notice,
        }
    }

    /// Files a supporter request for `account`.
    ///
    /// Returns `false` (without writing) when the account already has a
    /// pending request or is already a supporter.
    pub async fn request_supporter(&self, account: &Account) -> Result<bool> {
        if account.supporter {
            return Ok(false);
        }
        let requests = self.requests.list_all().await?;
        if requests.iter().any(|r| r.user_id == account.id) {
            return Ok(false);
        }

        self.requests
            .save(&SupporterRequest {
                user_id: account.id,
                user_name: account.name.clone(),
            })
            .await?;
        info!(target: "supporter", account_id = account.id, "supporter request filed");
        Ok(true)
    }

    /// Lists pending requests. Owner only.
    pub async fn pending_requests(&self, owner: &Account) -> Result<Vec<SupporterRequest>> {
        self.require_owner(owner)?;
        self.requests.list_all().await
    }

    /// Approves a pending request: the account becomes a supporter and the
    /// request is removed. Owner only.
    pub async fn approve(&self, owner: &Account, user_id: u64) -> Result<()> {
        self.require_owner(owner)?;
        self.set_supporter(owner, user_id, true).await?;
        self.requests.delete(user_id).await?;
        info!(target: "supporter", account_id = user_id, "supporter approved");
        Ok(())
    }

    /// Grants or revokes supporter status directly. Owner only.
    pub async fn set_supporter(
        &self,
        owner: &Account,
        user_id: u64,
        supporter: bool,
    ) -> Result<()> {
        self.require_owner(owner)?;
        let mut entry = self
            .accounts
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| OyasifyError::not_found("account", user_id.to_string()))?;
        entry.account.supporter = supporter;
        self.accounts.save(&entry).await
    }

    /// Broadcasts a notice to every account. Owner only.
    pub async fn broadcast(&self, owner: &Account, message: &str) -> Result<()> {
        self.require_owner(owner)?;
        if message.trim().is_empty() {
            return Err(OyasifyError::EmptyMessage);
        }
        self.notice
            .set(&GlobalNotice {
                message: Some(message.to_string()),
                seen: false,
            })
            .await
    }

    /// Returns the broadcast message once, marking it seen.
    pub async fn take_notice(&self) -> Result<Option<String>> {
        let notice = self.notice.get().await?;
        if notice.seen {
            return Ok(None);
        }
        self.notice
            .set(&GlobalNotice {
                message: notice.message.clone(),
                seen: true,
            })
            .await?;
        Ok(notice.message)
    }

    fn require_owner(&self, account: &Account) -> Result<()> {
        if !account.is_owner() {
            return Err(OyasifyError::auth(
                "only the owner may manage supporters".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        MockAccountRepository, MockGlobalNoticeRepository, MockSupporterRequestRepository,
    };
    use oyasify_core::theme::DEFAULT_THEME;
    use oyasify_core::user::{Role, StoredAccount};

    fn stored(id: u64, role: Role) -> StoredAccount {
        StoredAccount {
            account: Account {
                id,
                name: format!("user-{id}"),
                email: format!("user-{id}@example.com"),
                avatar_url: String::new(),
                bio: String::new(),
                role,
                theme: DEFAULT_THEME.to_string(),
                supporter: false,
            },
            password: "password".to_string(),
        }
    }

    fn service() -> SupporterService {
        let accounts = MockAccountRepository::with_entries(vec![
            stored(0, Role::Owner),
            stored(1, Role::User),
        ]);
        SupporterService::new(
            Arc::new(accounts),
            Arc::new(MockSupporterRequestRepository::new()),
            Arc::new(MockGlobalNoticeRepository::new()),
        )
    }

    #[tokio::test]
    async fn request_then_approve_grants_supporter() {
        let service = service();
        let owner = stored(0, Role::Owner).account;
        let user = stored(1, Role::User).account;

        assert!(service.request_supporter(&user).await.unwrap());
        assert_eq!(service.pending_requests(&owner).await.unwrap().len(), 1);

        service.approve(&owner, 1).await.unwrap();
        assert!(service.pending_requests(&owner).await.unwrap().is_empty());

        let entry = service.accounts.find_by_id(1).await.unwrap().unwrap();
        assert!(entry.account.supporter);
    }

    #[tokio::test]
    async fn duplicate_request_is_ignored() {
        let service = service();
        let user = stored(1, Role::User).account;

        assert!(service.request_supporter(&user).await.unwrap());
        assert!(!service.request_supporter(&user).await.unwrap());
    }

    #[tokio::test]
    async fn non_owner_cannot_manage() {
        let service = service();
        let user = stored(1, Role::User).account;

        assert!(service.pending_requests(&user).await.unwrap_err().is_auth());
        assert!(service.approve(&user, 1).await.unwrap_err().is_auth());
        assert!(service.broadcast(&user, "oi").await.unwrap_err().is_auth());
    }

    #[tokio::test]
    async fn broadcast_is_consumed_once() {
        let service = service();
        let owner = stored(0, Role::Owner).account;

        service.broadcast(&owner, "Nova versão no ar!").await.unwrap();
        assert_eq!(
            service.take_notice().await.unwrap().as_deref(),
            Some("Nova versão no ar!")
        );
        assert!(service.take_notice().await.unwrap().is_none());
    }
}
