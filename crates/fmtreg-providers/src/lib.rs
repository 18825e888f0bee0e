//! # fmtreg - Built-in Providers
//!
//! Provider implementations submitted to the discovery slices declared in
//! `fmtreg-application`. Linking this crate is enough to make them visible
//! to `ProviderRegistry::register_builtin_providers`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Image | `ImageProvider` | Zip, RAR, 7z, PDF, Folder |
//! | Metadata | `MetadataProvider` | ComicInfo, NFO |
//!
//! ## Usage
//!
//! ```ignore
//! // Force linking so the distributed slices are populated
//! extern crate fmtreg_providers;
//!
//! let registry = ProviderRegistry::<dyn ImageProvider>::new();
//! registry.register_builtin_providers();
//! ```

// Re-export fmtreg-domain types commonly used with providers
pub use fmtreg_domain::error::{Error, Result};
pub use fmtreg_domain::ports::{ImageProvider, MetadataProvider};

/// Provider-specific constants
pub mod constants;

/// Image container providers
///
/// Implements `ImageProvider` for archive, document and folder sources.
pub mod image;

/// Metadata sidecar providers
///
/// Implements `MetadataProvider` for documents stored next to books.
pub mod metadata;
