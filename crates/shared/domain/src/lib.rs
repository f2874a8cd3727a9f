//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! accounts and their credentials, devices and their configuration records.

pub mod account;
pub mod constants;
pub mod device;
pub mod error;
pub mod password;

pub use account::{
    Account, AccountChanges, AccountResponse, AccountRole, CreateAccountResponse, Preferences,
    UpdateProfileResponse,
};
pub use constants::*;
pub use device::{
    Device, DeviceCommand, DeviceConfig, DeviceConfigurationResponse, DiscoverDevicesResponse,
    DiscoveredDevice, RegisterDeviceResponse,
};
pub use error::{DomainError, DomainResult};
pub use password::Password;
