//! Domain value objects
//!
//! Immutable values shared between the registry, providers and callers.

/// Dialog filter rendering
pub mod dialog_filter;
/// File format descriptor
pub mod file_format;
/// Provider type identity
pub mod provider_type;

pub use dialog_filter::{DialogFilter, DialogFilterEntry};
pub use file_format::{FileFormat, FormatMatcher, MatchFn};
pub use provider_type::ProviderType;
