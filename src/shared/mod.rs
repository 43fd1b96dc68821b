//! Cross-cutting concerns: configuration and logging.

pub mod config;
pub mod logging;

pub use config::SyncConfig;
