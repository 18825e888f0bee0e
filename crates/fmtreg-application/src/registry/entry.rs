//! Provider descriptors and discovery entries
//!
//! [`ProviderEntry`] is what discovery hands to the registry: a static
//! record of function pointers describing one candidate implementation.
//! [`ProviderInfo`] is what the registry keeps once a candidate (or an
//! explicit registration) has been accepted.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use fmtreg_domain::{Error, FileFormat, ProviderType, Result};

/// Constructor bound to a registered provider
pub type ProviderFactory<T> = Arc<dyn Fn() -> Result<Arc<T>> + Send + Sync>;

/// Immutable binding of one provider type to the formats it supports
pub struct ProviderInfo<T: ?Sized> {
    provider_type: ProviderType,
    formats: Vec<FileFormat>,
    factory: Option<ProviderFactory<T>>,
}

impl<T: ?Sized> ProviderInfo<T> {
    pub(crate) fn new(
        provider_type: ProviderType,
        formats: Vec<FileFormat>,
        factory: Option<ProviderFactory<T>>,
    ) -> Self {
        Self {
            provider_type,
            formats,
            factory,
        }
    }

    /// Identity of the provider implementation
    pub fn provider_type(&self) -> ProviderType {
        self.provider_type
    }

    /// Formats claimed by the provider, in declaration order
    pub fn formats(&self) -> &[FileFormat] {
        &self.formats
    }

    /// True when at least one of the formats recognizes `source`
    pub fn supports(&self, source: &str) -> bool {
        self.formats.iter().any(|format| format.supports(source))
    }

    /// True when the provider can be instantiated by the registry
    pub fn has_factory(&self) -> bool {
        self.factory.is_some()
    }

    pub(crate) fn factory(&self) -> Option<&ProviderFactory<T>> {
        self.factory.as_ref()
    }
}

impl<T: ?Sized> fmt::Debug for ProviderInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderInfo")
            .field("provider_type", &self.provider_type)
            .field("formats", &self.formats)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

/// Discovery entry for one candidate provider implementation
///
/// Entries are usually submitted into a capability slice with
/// `#[linkme::distributed_slice(...)]`, but any `&ProviderEntry<T>` can be
/// passed to `ProviderRegistry::register_providers`.
pub struct ProviderEntry<T: ?Sized + 'static> {
    /// Unique provider name used in configuration (e.g., "zip", "pdf")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Identity of the concrete implementation
    pub provider_type: fn() -> ProviderType,
    /// Capabilities the implementation satisfies
    pub capabilities: &'static [&'static str],
    /// Zero-argument constructor; `None` for implementations that cannot be built directly
    pub constructor: Option<fn() -> Result<Arc<T>>>,
    /// Validity probe run on a freshly constructed instance before registration
    pub validate: Option<fn(&T) -> bool>,
    /// Formats declared by the implementation
    pub formats: fn() -> Vec<FileFormat>,
}

impl<T: ?Sized + 'static> ProviderEntry<T> {
    /// True when the entry declares `capability`
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Build a probe instance and run the validity check
    ///
    /// Returns `None` when the entry has no constructor, construction fails
    /// or the instance reports itself invalid.
    pub fn probe(&self) -> Option<Arc<T>> {
        let constructor = self.constructor?;
        let instance = try_construct((self.provider_type)(), constructor).ok()?;
        match self.validate {
            Some(validate) if !validate(&instance) => None,
            _ => Some(instance),
        }
    }

    /// Constructor as a registry factory
    pub fn factory(&self) -> Option<ProviderFactory<T>> {
        self.constructor.map(|constructor| {
            let factory: ProviderFactory<T> = Arc::new(constructor);
            factory
        })
    }

    pub(crate) fn to_info(self) -> ProviderInfo<T> {
        ProviderInfo::new((self.provider_type)(), (self.formats)(), self.factory())
    }
}

impl<T: ?Sized + 'static> Clone for ProviderEntry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + 'static> Copy for ProviderEntry<T> {}

impl<T: ?Sized + 'static> fmt::Debug for ProviderEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("name", &self.name)
            .field("provider_type", &(self.provider_type)())
            .field("capabilities", &self.capabilities)
            .field("constructible", &self.constructor.is_some())
            .finish_non_exhaustive()
    }
}

/// Run a provider constructor, turning a panic into an instantiation error
pub(crate) fn try_construct<T, F>(provider_type: ProviderType, constructor: F) -> Result<Arc<T>>
where
    T: ?Sized,
    F: FnOnce() -> Result<Arc<T>>,
{
    panic::catch_unwind(AssertUnwindSafe(constructor)).unwrap_or_else(|_| {
        Err(Error::instantiation(
            provider_type.short_name(),
            "constructor panicked",
        ))
    })
}

/// Binds a capability trait object to its name and discovery slice
///
/// Implemented for `dyn ImageProvider` and `dyn MetadataProvider` so that
/// `ProviderRegistry::<dyn ImageProvider>::register_builtin_providers()`
/// registers every compiled-in image provider.
pub trait Capability: Send + Sync + 'static {
    /// Capability name entries must declare
    const NAME: &'static str;

    /// Entries submitted for this capability at link time
    fn builtin_entries() -> &'static [ProviderEntry<Self>];
}
