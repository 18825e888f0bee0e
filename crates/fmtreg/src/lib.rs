//! # fmtreg
//!
//! A registry mapping file formats to the providers able to handle them.
//!
//! This crate is the public facade: it re-exports the layers and hosts the
//! command line interface.
//!
//! ## Example
//!
//! ```ignore
//! use fmtreg::application::ProviderRegistry;
//! use fmtreg::domain::ports::ImageProvider;
//!
//! let registry = ProviderRegistry::<dyn ImageProvider>::new();
//! registry.register_builtin_providers();
//! assert_eq!(registry.source_format_name("issue.cbz"), "Comic Book Zip");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Formats, provider identity, capability ports, errors
//! - `application` - Provider registry and discovery slices
//! - `providers` - Built-in image and metadata providers
//! - `infrastructure` - Configuration, logging, registry bootstrap

// Force-link fmtreg-providers to ensure linkme registrations are included
extern crate fmtreg_providers;

/// Domain layer - formats, provider identity and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use fmtreg_domain::*;
}

/// Application layer - provider registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use fmtreg_application::*;
}

/// Built-in providers
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use fmtreg_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use fmtreg_infrastructure::*;
}

/// Command line interface
pub mod cli;

// Re-export the most used types at the crate root
pub use fmtreg_application::ProviderRegistry;
pub use fmtreg_domain::{Error, FileFormat, ProviderType, Result};
pub use fmtreg_infrastructure::RegistryCatalog;
