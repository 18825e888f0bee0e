//! Domain ports
//!
//! Capability interfaces implemented by providers and by the hosting
//! application.

/// Provider capability ports
pub mod providers;
/// Localized text port
pub mod text;

pub use providers::{ImageProvider, MetadataProvider};
pub use text::{DefaultText, TextResolver};
