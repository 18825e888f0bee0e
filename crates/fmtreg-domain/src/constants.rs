//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `fmtreg_infrastructure::constants`.

// ============================================================================
// DIALOG FILTER CONSTANTS
// ============================================================================

/// Separator between labels and pattern lists in a dialog filter string
pub const DIALOG_FILTER_SEPARATOR: &str = "|";

/// Separator between extension globs inside one filter entry
pub const DIALOG_PATTERN_SEPARATOR: &str = ";";

/// Glob prefix prepended to every extension in a filter entry
pub const DIALOG_PATTERN_PREFIX: &str = "*.";

// ============================================================================
// LOCALIZATION KEYS
// ============================================================================

/// Text key for the fallback format name
pub const TEXT_UNKNOWN_KEY: &str = "Unknown";

/// Default text for the fallback format name
pub const TEXT_UNKNOWN_DEFAULT: &str = "Unknown";

/// Text key for the aggregate dialog filter entry
pub const TEXT_ALL_SUPPORTED_KEY: &str = "AllSupportedFiles";

/// Default text for the aggregate dialog filter entry
pub const TEXT_ALL_SUPPORTED_DEFAULT: &str = "All supported files";

// ============================================================================
// CAPABILITY NAMES
// ============================================================================

/// Capability implemented by page image providers
pub const CAPABILITY_IMAGE: &str = "image";

/// Capability implemented by metadata providers
pub const CAPABILITY_METADATA: &str = "metadata";
