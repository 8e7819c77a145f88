pub mod app;
pub mod args;
pub mod logger;
pub mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
