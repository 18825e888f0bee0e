//! File dialog filter
//!
//! Renders formats into the `label|patterns|label|patterns` grammar used by
//! file selection dialogs.

use std::fmt;

use serde::Serialize;

use crate::constants::{DIALOG_FILTER_SEPARATOR, DIALOG_PATTERN_SEPARATOR};
use crate::value_objects::FileFormat;

/// One `(label, patterns)` pair of a dialog filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogFilterEntry {
    /// Text shown to the user
    pub label: String,
    /// Extension globs such as `*.cbz`
    pub patterns: Vec<String>,
}

impl fmt::Display for DialogFilterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.label,
            DIALOG_FILTER_SEPARATOR,
            self.patterns.join(DIALOG_PATTERN_SEPARATOR)
        )
    }
}

/// Ordered list of dialog filter entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DialogFilter {
    entries: Vec<DialogFilterEntry>,
}

impl DialogFilter {
    /// Build a filter with one entry per format, in iteration order
    ///
    /// Formats without extensions are skipped. When `all_label` is given and
    /// at least one entry exists, an aggregate entry covering every pattern
    /// is placed first.
    pub fn from_formats<'a, I>(formats: I, all_label: Option<&str>) -> Self
    where
        I: IntoIterator<Item = &'a FileFormat>,
    {
        let mut entries = Vec::new();
        let mut all_patterns: Vec<String> = Vec::new();

        for format in formats {
            let patterns = format.dialog_patterns();
            if patterns.is_empty() {
                continue;
            }
            for pattern in &patterns {
                if !all_patterns.contains(pattern) {
                    all_patterns.push(pattern.clone());
                }
            }
            let label = format!(
                "{} ({})",
                format.name(),
                patterns.join(DIALOG_PATTERN_SEPARATOR)
            );
            entries.push(DialogFilterEntry {
                label: label.trim_start().to_string(),
                patterns,
            });
        }

        if let Some(label) = all_label
            && !entries.is_empty()
        {
            entries.insert(
                0,
                DialogFilterEntry {
                    label: label.to_string(),
                    patterns: all_patterns,
                },
            );
        }

        Self { entries }
    }

    /// Filter entries in display order
    pub fn entries(&self) -> &[DialogFilterEntry] {
        &self.entries
    }

    /// True when no format contributed an entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for DialogFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(DIALOG_FILTER_SEPARATOR)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
