//! HTTP request handlers.

pub mod account_handler;
pub mod device_handler;

pub use account_handler::{account_routes, profile_routes};
pub use device_handler::device_routes;
