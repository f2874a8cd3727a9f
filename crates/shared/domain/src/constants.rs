//! Domain-level constants.
//!
//! These constants define business rules and fixed wire values.

// =============================================================================
// Account Roles
// =============================================================================

/// Default role assigned to new accounts
pub const ROLE_USER: &str = "USER";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "ADMIN";

// =============================================================================
// Profile fields
// =============================================================================

/// Field names reported by the profile update flow, in staging order
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_NAME: &str = "name";
pub const FIELD_PASSWORD: &str = "password";

// =============================================================================
// Authentication
// =============================================================================

/// Default session token lifetime in minutes
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 30;

/// Minimum token signing secret length in bytes
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Response messages
// =============================================================================

pub const MSG_ACCOUNT_CREATED: &str = "User created successfully.";

pub const MSG_DEVICE_CONFIGURED: &str = "Device configuration updated successfully.";

/// Registration status reported for a newly registered device
pub const DEVICE_REGISTRATION_SUCCESS: &str = "success";
