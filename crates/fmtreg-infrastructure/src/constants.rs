//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `fmtreg_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "fmtreg.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "fmtreg";

/// Environment variable prefix for configuration (`FMTREG__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "FMTREG";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "FMTREG_LOG";

/// Maximum number of daily log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// File name stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "fmtreg";
