//! Account domain entity and related types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    FIELD_EMAIL, FIELD_NAME, FIELD_PASSWORD, MSG_ACCOUNT_CREATED, ROLE_ADMIN, ROLE_USER,
};
use crate::error::{DomainError, DomainResult};
use crate::password::Password;

/// Opaque per-account preferences, stored verbatim.
pub type Preferences = BTreeMap<String, String>;

/// Account roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountRole {
    User,
    Admin,
}

impl AccountRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, AccountRole::Admin)
    }

    /// Stored representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Admin => ROLE_ADMIN,
            AccountRole::User => ROLE_USER,
        }
    }
}

impl From<&str> for AccountRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => AccountRole::Admin,
            _ => AccountRole::User,
        }
    }
}

impl From<String> for AccountRole {
    fn from(s: String) -> Self {
        AccountRole::from(s.as_str())
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account domain entity. The email is the identity key and is unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: Option<String>,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with the default role
    pub fn new(id: Uuid, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            password_hash,
            name: None,
            role: AccountRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if account has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Verify a plain text password against the stored hash
    pub fn verify_password(&self, plain_text: &str) -> bool {
        Password::from_hash(self.password_hash.as_str()).verify(plain_text)
    }
}

/// Staged changes for a partial profile update.
///
/// Only `Some` fields are written. A new password is hashed while staging,
/// so a raw password can never reach storage.
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password_hash: Option<Password>,
}

impl AccountChanges {
    /// Stage the present fields, hashing the password if one is given.
    pub fn stage(
        email: Option<String>,
        name: Option<String>,
        password: Option<&str>,
    ) -> DomainResult<Self> {
        if email.as_deref().is_some_and(|e| e.trim().is_empty()) {
            return Err(DomainError::validation("Email must not be empty"));
        }
        if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(DomainError::validation("Name must not be empty"));
        }

        let password_hash = password.map(Password::new).transpose()?;

        Ok(Self {
            email,
            name,
            password_hash,
        })
    }

    /// True when no field is staged
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.password_hash.is_none()
    }

    /// Names of the staged fields, in a fixed order
    pub fn updated_fields(&self) -> Vec<String> {
        [
            (self.email.is_some(), FIELD_EMAIL),
            (self.name.is_some(), FIELD_NAME),
            (self.password_hash.is_some(), FIELD_PASSWORD),
        ]
        .into_iter()
        .filter(|(staged, _)| *staged)
        .map(|(_, field)| field.to_string())
        .collect()
    }
}

/// Confirmation returned after a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateAccountResponse {
    /// Identifier of the new account
    pub user_id: Uuid,
    /// Registered email address
    pub email: String,
    /// Human readable confirmation
    pub message: String,
}

impl From<Account> for CreateAccountResponse {
    fn from(account: Account) -> Self {
        Self {
            user_id: account.id,
            email: account.email,
            message: MSG_ACCOUNT_CREATED.to_string(),
        }
    }
}

/// Result of a partial profile update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub id: Uuid,
    /// Names of the fields that were written
    #[serde(rename = "updatedFields")]
    pub updated_fields: Vec<String>,
}

/// Account profile (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
            role: account.role,
            created_at: account.created_at,
        }
    }
}
