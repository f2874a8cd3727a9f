//! HomeSphere - backend for a home-automation dashboard.
//!
//! Accounts authenticate with an email and password and receive short-lived
//! bearer tokens; devices can be discovered, registered and configured.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **services**: Use cases (authentication, profiles, devices)
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, middleware, and routes
//!
//! Domain types live in the `domain` crate and error handling in `common`.
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use common::{AppError, AppResult};
pub use config::Config;
