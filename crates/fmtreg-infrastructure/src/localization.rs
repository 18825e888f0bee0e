//! Configured text table
//!
//! Resolves registry labels from `[localization.strings]`, falling back to
//! the inline defaults.

use std::collections::BTreeMap;

use fmtreg_domain::ports::TextResolver;

use crate::config::LocalizationConfig;

/// [`TextResolver`] backed by a key/text map
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    strings: BTreeMap<String, String>,
}

impl TextTable {
    /// Create a table from explicit entries
    pub fn new(strings: BTreeMap<String, String>) -> Self {
        Self { strings }
    }

    /// Create a table from the localization section
    pub fn from_config(config: &LocalizationConfig) -> Self {
        Self::new(config.strings.clone())
    }

    /// Number of overridden keys
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when no key is overridden
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl TextResolver for TextTable {
    fn text(&self, key: &str, default: &str) -> String {
        self.strings
            .get(key)
            .filter(|text| !text.is_empty())
            .map_or_else(|| default.to_string(), Clone::clone)
    }
}

impl FromIterator<(String, String)> for TextTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
