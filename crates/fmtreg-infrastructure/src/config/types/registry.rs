//! Provider registry configuration types

use serde::{Deserialize, Serialize};

/// Provider registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Entry names (e.g. "7z", "pdf") withheld from discovery
    pub disabled_providers: Vec<String>,

    /// Prepend the "All supported files" entry to dialog filters
    pub all_filter: bool,

    /// Sort dialog filter entries by format name
    pub sort_filter: bool,
}

impl RegistryConfig {
    /// True when the discovery entry called `name` is disabled
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled_providers
            .iter()
            .any(|disabled| disabled.eq_ignore_ascii_case(name))
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            disabled_providers: Vec::new(),
            all_filter: true,
            sort_filter: false,
        }
    }
}
