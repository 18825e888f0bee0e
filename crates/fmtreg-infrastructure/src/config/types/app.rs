//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{LocalizationConfig, LoggingConfig, RegistryConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Provider registry configuration
    pub registry: RegistryConfig,

    /// User-visible label overrides
    pub localization: LocalizationConfig,
}
