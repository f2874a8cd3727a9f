//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits, so each one can
//! be exercised against mocks.

mod account_service;
mod auth_service;
pub mod container;
mod device_service;
mod token_issuer;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use account_service::{AccountManager, AccountService};
pub use auth_service::{AuthService, Authenticator, LoginResponse};
pub use device_service::{DeviceManager, DeviceService};
pub use token_issuer::{InvalidToken, IssuedToken, SessionClaims, TokenIssuer};
