//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the provider registry.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment layered configuration (defaults, TOML, env) |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Registry Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Capability registries built from the discovery slices |
//! | [`localization`] | Configured text table for registry labels |

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod localization;
pub mod logging;

// Re-export commonly used types
pub use catalog::RegistryCatalog;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use localization::TextTable;
