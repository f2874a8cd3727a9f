//! Service container - centralized service access.

use std::sync::Arc;

use super::{
    AccountManager, AccountService, AuthService, Authenticator, DeviceManager, DeviceService,
    TokenIssuer,
};
use crate::config::Config;
use crate::infra::{AccountStore, DeviceStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get account service
    fn accounts(&self) -> Arc<dyn AccountService>;

    /// Get device service
    fn devices(&self) -> Arc<dyn DeviceService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    account_service: Arc<dyn AccountService>,
    device_service: Arc<dyn DeviceService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let accounts = Arc::new(AccountStore::new(db.clone()));
        let devices = Arc::new(DeviceStore::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(
                accounts.clone(),
                TokenIssuer::from_config(config),
            )),
            account_service: Arc::new(AccountManager::new(accounts)),
            device_service: Arc::new(DeviceManager::new(devices)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn accounts(&self) -> Arc<dyn AccountService> {
        self.account_service.clone()
    }

    fn devices(&self) -> Arc<dyn DeviceService> {
        self.device_service.clone()
    }
}
