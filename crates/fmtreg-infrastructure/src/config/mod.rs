//! Configuration
//!
//! [`AppConfig`] and its sections, loaded by [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LocalizationConfig, LoggingConfig, RegistryConfig};
