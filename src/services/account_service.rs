//! Account service - profile reads and partial profile updates.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::infra::AccountRepository;
use common::{AppResult, OptionExt};
use domain::{Account, AccountChanges, UpdateProfileResponse};

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Get account by its identity key
    async fn get_by_email(&self, email: &str) -> AppResult<Account>;

    /// Apply a partial update. A new password is hashed before it is staged.
    async fn update_profile(
        &self,
        id: Uuid,
        email: Option<String>,
        name: Option<String>,
        password: Option<String>,
    ) -> AppResult<UpdateProfileResponse>;
}

/// Concrete implementation of AccountService.
pub struct AccountManager {
    accounts: Arc<dyn AccountRepository>,
}

impl AccountManager {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn get_by_email(&self, email: &str) -> AppResult<Account> {
        self.accounts.find_by_email(email).await?.ok_or_not_found()
    }

    async fn update_profile(
        &self,
        id: Uuid,
        email: Option<String>,
        name: Option<String>,
        password: Option<String>,
    ) -> AppResult<UpdateProfileResponse> {
        let changes = AccountChanges::stage(email, name, password.as_deref())?;
        let updated_fields = changes.updated_fields();

        let account = self.accounts.update(id, changes).await?;

        tracing::info!(account_id = %account.id, fields = ?updated_fields, "Profile updated");
        Ok(UpdateProfileResponse {
            success: true,
            id: account.id,
            updated_fields,
        })
    }
}
