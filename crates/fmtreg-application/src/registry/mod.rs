//! Provider Registry
//!
//! Maps declared file formats to the providers able to handle them and
//! resolves a provider for an arbitrary source identifier.
//!
//! ## Locking
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ lookups            read lock → clone snapshot → unlock       │
//! │ register_provider  upgradable read → dup check → upgrade     │
//! │ register_providers probe outside lock → one write lock       │
//! │ create_*           snapshot lookup → construct without lock  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Insertion order is significant: when several providers recognize the
//! same source, the earliest registered one wins.

mod entry;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use fmtreg_domain::constants::{
    TEXT_ALL_SUPPORTED_DEFAULT, TEXT_ALL_SUPPORTED_KEY, TEXT_UNKNOWN_DEFAULT, TEXT_UNKNOWN_KEY,
};
use fmtreg_domain::ports::{DefaultText, TextResolver};
use fmtreg_domain::{DialogFilter, FileFormat, ProviderType};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use tracing::debug;

pub use entry::{Capability, ProviderEntry, ProviderFactory, ProviderInfo};

use entry::try_construct;

/// Concurrency-safe table of provider-to-format bindings for capability `T`
pub struct ProviderRegistry<T: ?Sized + Send + Sync + 'static> {
    entries: RwLock<Vec<Arc<ProviderInfo<T>>>>,
    text: Arc<dyn TextResolver>,
}

impl<T: ?Sized + Send + Sync + 'static> ProviderRegistry<T> {
    /// Create an empty registry using inline default texts
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            text: Arc::new(DefaultText),
        }
    }

    /// Use `text` to resolve the "Unknown" and "All supported files" labels
    #[must_use]
    pub fn with_text_resolver(mut self, text: Arc<dyn TextResolver>) -> Self {
        self.text = text;
        self
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Bind `provider_type` to `formats`
    ///
    /// A type that is already registered is left untouched and `false` is
    /// returned. Formats are not validated.
    pub fn register_provider<I>(
        &self,
        provider_type: ProviderType,
        formats: I,
        factory: Option<ProviderFactory<T>>,
    ) -> bool
    where
        I: IntoIterator<Item = FileFormat>,
    {
        let formats: Vec<FileFormat> = formats.into_iter().collect();

        let entries = self.entries.upgradable_read();
        if contains_type(&entries, provider_type) {
            return false;
        }
        let mut entries = RwLockUpgradableReadGuard::upgrade(entries);
        entries.push(Arc::new(ProviderInfo::new(provider_type, formats, factory)));
        drop(entries);

        debug!(provider = %provider_type, "Registered provider");
        true
    }

    /// Register a self-describing candidate
    ///
    /// The entry is probed first; candidates that cannot be constructed or
    /// report themselves invalid are skipped silently.
    pub fn register_entry(&self, entry: &ProviderEntry<T>) -> bool {
        if entry.probe().is_none() {
            return false;
        }
        self.register_provider((entry.provider_type)(), (entry.formats)(), entry.factory())
    }

    /// Register every candidate that declares `capability` and can be built
    ///
    /// Probing happens before any lock is taken; the accepted candidates are
    /// then appended under a single write lock, so readers observe either
    /// the whole batch or none of it. Returns the number of providers added.
    pub fn register_providers<'a, I>(&self, candidates: I, capability: &str) -> usize
    where
        I: IntoIterator<Item = &'a ProviderEntry<T>>,
    {
        let registered: HashSet<ProviderType> =
            self.provider_types().into_iter().collect();

        let accepted: Vec<ProviderInfo<T>> = candidates
            .into_iter()
            .filter(|entry| entry.has_capability(capability) && entry.constructor.is_some())
            .filter(|entry| !registered.contains(&(entry.provider_type)()))
            .filter(|entry| entry.probe().is_some())
            .map(|entry| entry.to_info())
            .collect();

        let mut entries = self.entries.write();
        let mut added = 0;
        for info in accepted {
            if contains_type(&entries, info.provider_type()) {
                continue;
            }
            entries.push(Arc::new(info));
            added += 1;
        }
        drop(entries);

        debug!(capability, added, "Registered provider batch");
        added
    }

    /// Register every compiled-in provider of capability `T`
    pub fn register_builtin_providers(&self) -> usize
    where
        T: Capability,
    {
        self.register_providers(T::builtin_entries(), T::NAME)
    }

    // ------------------------------------------------------------------
    // Enumeration
    // ------------------------------------------------------------------

    /// Snapshot of all descriptors in insertion order
    pub fn provider_infos(&self) -> Vec<Arc<ProviderInfo<T>>> {
        self.entries.read().clone()
    }

    /// Registered provider types in insertion order
    pub fn provider_types(&self) -> Vec<ProviderType> {
        self.entries
            .read()
            .iter()
            .map(|info| info.provider_type())
            .collect()
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// True when `provider_type` is registered
    pub fn contains(&self, provider_type: ProviderType) -> bool {
        contains_type(&self.entries.read(), provider_type)
    }

    /// All formats of all providers, in registration order
    pub fn source_formats(&self) -> Vec<FileFormat> {
        self.provider_infos()
            .iter()
            .flat_map(|info| info.formats().iter().cloned())
            .collect()
    }

    /// Deduplicated extensions of every registered format
    pub fn file_extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = Vec::new();
        for format in self.source_formats() {
            for ext in format.extensions() {
                if !extensions.contains(ext) {
                    extensions.push(ext.clone());
                }
            }
        }
        extensions
    }

    // ------------------------------------------------------------------
    // Source resolution
    // ------------------------------------------------------------------

    /// Descriptors with at least one format recognizing `source`
    pub fn source_provider_infos(&self, source: &str) -> Vec<Arc<ProviderInfo<T>>> {
        self.provider_infos()
            .into_iter()
            .filter(|info| info.supports(source))
            .collect()
    }

    /// Earliest registered descriptor recognizing `source`
    pub fn source_provider_info(&self, source: &str) -> Option<Arc<ProviderInfo<T>>> {
        self.provider_infos()
            .into_iter()
            .find(|info| info.supports(source))
    }

    /// Provider types recognizing `source`, in registration order
    pub fn source_provider_types(&self, source: &str) -> Vec<ProviderType> {
        self.source_provider_infos(source)
            .iter()
            .map(|info| info.provider_type())
            .collect()
    }

    /// Earliest registered provider type recognizing `source`
    pub fn source_provider_type(&self, source: &str) -> Option<ProviderType> {
        self.source_provider_info(source)
            .map(|info| info.provider_type())
    }

    /// All formats of the providers recognizing `source`
    pub fn source_formats_for(&self, source: &str) -> Vec<FileFormat> {
        self.source_provider_infos(source)
            .iter()
            .flat_map(|info| info.formats().iter().cloned())
            .collect()
    }

    /// The format of the winning provider whose own rule accepts `source`
    pub fn source_format(&self, source: &str) -> Option<FileFormat> {
        let info = self.source_provider_info(source)?;
        info.formats()
            .iter()
            .find(|format| format.supports(source))
            .cloned()
    }

    /// Name of the format recognizing `source`, or the localized "Unknown"
    pub fn source_format_name(&self, source: &str) -> String {
        match self.source_format(source) {
            Some(format) if !format.name().is_empty() => format.name().to_string(),
            _ => self.text.text(TEXT_UNKNOWN_KEY, TEXT_UNKNOWN_DEFAULT),
        }
    }

    // ------------------------------------------------------------------
    // Format lookup
    // ------------------------------------------------------------------

    /// First provider declaring a format named exactly `format_name`
    pub fn format_provider_type_by_name(&self, format_name: &str) -> Option<ProviderType> {
        self.format_provider_info(|format| format.name() == format_name)
            .map(|info| info.provider_type())
    }

    /// First provider declaring a format with id `format_id`
    pub fn format_provider_type_by_id(&self, format_id: i32) -> Option<ProviderType> {
        self.format_provider_info(|format| format.id() == format_id)
            .map(|info| info.provider_type())
    }

    fn format_provider_info<P>(&self, predicate: P) -> Option<Arc<ProviderInfo<T>>>
    where
        P: Fn(&FileFormat) -> bool,
    {
        self.provider_infos()
            .into_iter()
            .find(|info| info.formats().iter().any(&predicate))
    }

    // ------------------------------------------------------------------
    // Dialog filter
    // ------------------------------------------------------------------

    /// File dialog filter over all formats
    ///
    /// With `sort`, formats are ordered by their natural ordering (name,
    /// then id); otherwise registration order is kept.
    pub fn dialog_filter(&self, with_all_filter: bool, sort: bool) -> String {
        let mut formats = self.source_formats();
        if sort {
            formats.sort();
        }
        self.render_dialog_filter(&formats, with_all_filter)
    }

    /// File dialog filter with a caller-defined format ordering
    pub fn dialog_filter_by<F>(&self, with_all_filter: bool, compare: F) -> String
    where
        F: FnMut(&FileFormat, &FileFormat) -> Ordering,
    {
        let mut formats = self.source_formats();
        formats.sort_by(compare);
        self.render_dialog_filter(&formats, with_all_filter)
    }

    fn render_dialog_filter(&self, formats: &[FileFormat], with_all_filter: bool) -> String {
        let all_label = with_all_filter
            .then(|| self.text.text(TEXT_ALL_SUPPORTED_KEY, TEXT_ALL_SUPPORTED_DEFAULT));
        DialogFilter::from_formats(formats, all_label.as_deref()).to_string()
    }

    // ------------------------------------------------------------------
    // Instantiation
    // ------------------------------------------------------------------

    /// New instance of the first provider declaring `format_name`
    pub fn create_format_provider_by_name(&self, format_name: &str) -> Option<Arc<T>> {
        let info = self.format_provider_info(|format| format.name() == format_name)?;
        instantiate(&info)
    }

    /// New instance of the first provider declaring `format_id`
    pub fn create_format_provider_by_id(&self, format_id: i32) -> Option<Arc<T>> {
        let info = self.format_provider_info(|format| format.id() == format_id)?;
        instantiate(&info)
    }

    /// One instance per registered provider, `None` where construction failed
    pub fn create_providers(&self) -> Vec<Option<Arc<T>>> {
        self.provider_infos()
            .iter()
            .map(|info| instantiate(info))
            .collect()
    }

    /// New instance of the provider resolved for `source`
    pub fn create_source_provider(&self, source: &str) -> Option<Arc<T>> {
        let info = self.source_provider_info(source)?;
        instantiate(&info)
    }
}

fn contains_type<T: ?Sized>(entries: &[Arc<ProviderInfo<T>>], provider_type: ProviderType) -> bool {
    entries
        .iter()
        .any(|info| info.provider_type() == provider_type)
}

fn instantiate<T: ?Sized>(info: &ProviderInfo<T>) -> Option<Arc<T>> {
    let provider_type = info.provider_type();
    let Some(factory) = info.factory() else {
        debug!(provider = %provider_type, "Provider has no factory");
        return None;
    };

    match try_construct(provider_type, || factory()) {
        Ok(provider) => Some(provider),
        Err(e) => {
            debug!(provider = %provider_type, error = %e, "Provider instantiation failed");
            None
        }
    }
}

impl<T: ?Sized + Send + Sync + 'static> Default for ProviderRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Send + Sync + 'static> fmt::Debug for ProviderRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.provider_types())
            .finish_non_exhaustive()
    }
}
