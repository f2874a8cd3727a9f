//! Authentication service - registration, login and token verification.
//!
//! Raw passwords are hashed here before they reach the repository, and login
//! failures are indistinguishable whether the account exists or not.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::token_issuer::{SessionClaims, TokenIssuer};
use crate::infra::AccountRepository;
use common::{AppError, AppResult};
use domain::{Account, Password, Preferences};

/// Token returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Instant after which the token is refused
    pub expiry: DateTime<Utc>,
}

/// Real Argon2 hash verified when the account does not exist, so both
/// failure paths do the same work.
static DUMMY_HASH: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("homesphere-dummy-password").ok());

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account with its preferences
    async fn register(
        &self,
        email: String,
        password: String,
        preferences: Preferences,
    ) -> AppResult<Account>;

    /// Verify credentials and issue a session token
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse>;

    /// Verify a bearer token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<SessionClaims>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    accounts: Arc<dyn AccountRepository>,
    tokens: TokenIssuer,
}

impl Authenticator {
    pub fn new(accounts: Arc<dyn AccountRepository>, tokens: TokenIssuer) -> Self {
        Self { accounts, tokens }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        email: String,
        password: String,
        preferences: Preferences,
    ) -> AppResult<Account> {
        let password_hash = Password::new(&password)?.into_string();

        // Uniqueness is enforced by the store's index, not probed here
        let account = self
            .accounts
            .create(email, password_hash, preferences)
            .await?;

        tracing::info!(account_id = %account.id, "Account registered");
        Ok(account)
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse> {
        let account = self.accounts.find_by_email(&email).await?;

        let authenticated = match &account {
            Some(account) => account.verify_password(&password),
            None => {
                if let Some(dummy) = DUMMY_HASH.as_ref() {
                    dummy.verify(&password);
                }
                false
            }
        };

        if !authenticated {
            tracing::debug!("Rejected login attempt");
            return Err(AppError::InvalidCredentials);
        }

        let issued = self.tokens.issue_default(&email)?;
        Ok(LoginResponse {
            token: issued.token,
            expiry: issued.expires_at,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<SessionClaims> {
        self.tokens.validate(token).map_err(|reason| {
            tracing::debug!(%reason, "Rejected bearer token");
            AppError::from(reason)
        })
    }
}
