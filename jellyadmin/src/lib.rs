pub mod api;
pub mod config;
pub mod model;

/// Name sent to the server in the authorization header.
pub const CLIENT_NAME: &str = "Jellyadmin";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
