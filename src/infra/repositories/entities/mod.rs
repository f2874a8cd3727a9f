//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod account;
pub mod account_settings;
pub mod device;
pub mod device_control;
