//! Application configuration.
//!
//! Loaded once at startup from `config.toml`; every section is optional
//! and falls back to its defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, LoggingConfig, UiConfig};
