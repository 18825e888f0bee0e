//! File format value object
//!
//! A [`FileFormat`] describes one content kind a provider can handle: a
//! numeric id, a display name, the file extensions it is known by and the
//! recognition rule applied to source identifiers.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::Serialize;

use crate::constants::DIALOG_PATTERN_PREFIX;
use crate::error::{Error, Result};

/// Predicate over a source identifier
pub type MatchFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Recognition rule of a [`FileFormat`]
#[derive(Clone, Default)]
pub enum FormatMatcher {
    /// Source ends with `.<ext>` for one of the format extensions (case-insensitive)
    #[default]
    Extensions,
    /// Source matches any of the glob patterns (case-insensitive)
    Glob(GlobSet),
    /// Caller supplied predicate
    Custom(MatchFn),
}

impl fmt::Debug for FormatMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extensions => f.write_str("Extensions"),
            Self::Glob(set) => write!(f, "Glob({} patterns)", set.len()),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Immutable description of a supported file format
#[derive(Debug, Clone, Serialize)]
pub struct FileFormat {
    id: i32,
    name: String,
    extensions: Vec<String>,
    #[serde(skip)]
    matcher: FormatMatcher,
}

impl FileFormat {
    /// Create a format recognized by its extensions
    ///
    /// Extensions are stored lower-cased and without a leading dot;
    /// blanks and duplicates are dropped, declaration order is kept.
    pub fn new<I, S>(id: i32, name: impl Into<String>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = normalize_extension(ext.as_ref());
            if !ext.is_empty() && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }

        Self {
            id,
            name: name.into(),
            extensions: normalized,
            matcher: FormatMatcher::Extensions,
        }
    }

    /// Recognize sources by glob patterns instead of extensions
    ///
    /// The extensions are still used for dialog filters and extension listings.
    pub fn with_globs<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    Error::invalid_argument(format!("Invalid glob pattern '{pattern}': {e}"))
                })?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| Error::invalid_argument(format!("Invalid glob set: {e}")))?;

        self.matcher = FormatMatcher::Glob(set);
        Ok(self)
    }

    /// Recognize sources with a caller supplied predicate
    pub fn with_matcher<F>(mut self, matcher: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.matcher = FormatMatcher::Custom(Arc::new(matcher));
        self
    }

    /// Numeric identity, unique within one registry
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Display name, may be empty
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized extensions without leading dot
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Recognition rule
    pub fn matcher(&self) -> &FormatMatcher {
        &self.matcher
    }

    /// Check whether this format recognizes the given source identifier
    pub fn supports(&self, source: &str) -> bool {
        match &self.matcher {
            FormatMatcher::Extensions => {
                let source = source.to_lowercase();
                self.extensions.iter().any(|ext| {
                    source
                        .strip_suffix(ext.as_str())
                        .is_some_and(|stem| stem.ends_with('.'))
                })
            }
            FormatMatcher::Glob(set) => set.is_match(source),
            FormatMatcher::Custom(matcher) => matcher(source),
        }
    }

    /// Extension globs (`*.ext`) used by dialog filters
    pub fn dialog_patterns(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| format!("{DIALOG_PATTERN_PREFIX}{ext}"))
            .collect()
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

impl PartialEq for FileFormat {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.extensions == other.extensions
    }
}

impl Eq for FileFormat {}

impl Ord for FileFormat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.extensions.cmp(&other.extensions))
    }
}

impl PartialOrd for FileFormat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
