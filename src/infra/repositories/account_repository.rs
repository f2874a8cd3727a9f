//! Account repository: credential store plus per-account preferences.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr, TransactionTrait,
};
use uuid::Uuid;

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use super::entities::account_settings::{
    self, ActiveModel as SettingsActiveModel, Entity as SettingsEntity,
};
use common::{AppError, AppResult};
use domain::{Account, AccountChanges, Preferences, ROLE_USER};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;

    /// Find account by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Create an account together with its preferences row.
    ///
    /// A duplicate email surfaces as `AppError::Conflict` from the unique index.
    async fn create(
        &self,
        email: String,
        password_hash: String,
        preferences: Preferences,
    ) -> AppResult<Account>;

    /// Apply staged changes; absent fields are left untouched
    async fn update(&self, id: Uuid, changes: AccountChanges) -> AppResult<Account>;

    /// Stored preferences of an account
    async fn preferences(&self, account_id: Uuid) -> AppResult<Option<Preferences>>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map a unique-index violation to a conflict, anything else to a database error
fn unique_violation_as_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Account"),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        let result = AccountEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        preferences: Preferences,
    ) -> AppResult<Account> {
        let settings =
            serde_json::to_value(&preferences).map_err(|e| AppError::internal(e.to_string()))?;

        let now = chrono::Utc::now();
        let txn = self.db.begin().await?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            name: Set(None),
            role: Set(ROLE_USER.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(unique_violation_as_conflict)?;

        SettingsActiveModel {
            id: Set(Uuid::new_v4()),
            account_id: Set(model.id),
            settings: Set(settings),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(Account::from(model))
    }

    async fn update(&self, id: Uuid, changes: AccountChanges) -> AppResult<Account> {
        let existing = AccountEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        if changes.is_empty() {
            return Ok(Account::from(existing));
        }

        let mut active: ActiveModel = existing.into();

        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(name) = changes.name {
            active.name = Set(Some(name));
        }
        if let Some(password) = changes.password_hash {
            active.password_hash = Set(password.into_string());
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active
            .update(&self.db)
            .await
            .map_err(unique_violation_as_conflict)?;
        Ok(Account::from(model))
    }

    async fn preferences(&self, account_id: Uuid) -> AppResult<Option<Preferences>> {
        let row = SettingsEntity::find()
            .filter(account_settings::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await?;

        row.map(|r| serde_json::from_value(r.settings))
            .transpose()
            .map_err(|e| AppError::internal(format!("Corrupt preferences row: {}", e)))
    }
}
