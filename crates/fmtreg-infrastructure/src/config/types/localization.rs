//! Localization configuration types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Overrides for user-visible labels, keyed by text key
///
/// ```toml
/// [localization.strings]
/// Unknown = "Unbekannt"
/// AllSupportedFiles = "Alle unterstützten Dateien"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Text per key
    pub strings: BTreeMap<String, String>,
}
