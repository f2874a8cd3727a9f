//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod account_repository;
mod device_repository;
pub mod entities;

pub use account_repository::{AccountRepository, AccountStore};
pub use device_repository::{DeviceRepository, DeviceStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use device_repository::MockDeviceRepository;
