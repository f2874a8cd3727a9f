//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Repositories over SeaORM entities

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{AccountRepository, AccountStore, DeviceRepository, DeviceStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockAccountRepository, MockDeviceRepository};
