//! Registry Catalog
//!
//! Builds one [`ProviderRegistry`] per capability from the link-time
//! discovery slices.
//!
//! ## Architecture
//!
//! ```text
//! linkme (compile-time)     RegistryCatalog (runtime)
//! ─────────────────────     ─────────────────────────
//! IMAGE_PROVIDERS      →    minus registry.disabled_providers
//! METADATA_PROVIDERS          ↓
//!                           ProviderRegistry::register_providers(..)
//!                             ↓
//!                           catalog.image() / catalog.metadata()
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let catalog = RegistryCatalog::build(&config);
//! let format = catalog.image().source_format_name("issue.cbz");
//! ```

// Force linking so the built-in providers reach the discovery slices
extern crate fmtreg_providers;

use std::fmt;
use std::sync::Arc;

use fmtreg_application::{Capability, ProviderRegistry};
use fmtreg_domain::ports::{ImageProvider, MetadataProvider, TextResolver};
use tracing::{info, warn};

use crate::config::{AppConfig, RegistryConfig};
use crate::localization::TextTable;

/// Capability registries of the running application
pub struct RegistryCatalog {
    image: ProviderRegistry<dyn ImageProvider>,
    metadata: ProviderRegistry<dyn MetadataProvider>,
    all_filter: bool,
    sort_filter: bool,
}

impl RegistryCatalog {
    /// Discover and register every enabled built-in provider
    pub fn build(config: &AppConfig) -> Self {
        let text: Arc<dyn TextResolver> =
            Arc::new(TextTable::from_config(&config.localization));

        warn_unknown_disabled(&config.registry);

        let image = build_registry::<dyn ImageProvider>(&config.registry, Arc::clone(&text));
        let metadata = build_registry::<dyn MetadataProvider>(&config.registry, text);

        Self {
            image,
            metadata,
            all_filter: config.registry.all_filter,
            sort_filter: config.registry.sort_filter,
        }
    }

    /// Image provider registry
    pub fn image(&self) -> &ProviderRegistry<dyn ImageProvider> {
        &self.image
    }

    /// Metadata provider registry
    pub fn metadata(&self) -> &ProviderRegistry<dyn MetadataProvider> {
        &self.metadata
    }

    /// Dialog filter over the image formats using the configured flags
    pub fn dialog_filter(&self) -> String {
        self.image.dialog_filter(self.all_filter, self.sort_filter)
    }
}

impl fmt::Debug for RegistryCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryCatalog")
            .field("image", &self.image)
            .field("metadata", &self.metadata)
            .field("all_filter", &self.all_filter)
            .field("sort_filter", &self.sort_filter)
            .finish()
    }
}

fn build_registry<T>(config: &RegistryConfig, text: Arc<dyn TextResolver>) -> ProviderRegistry<T>
where
    T: ?Sized + Capability,
{
    let registry = ProviderRegistry::<T>::new().with_text_resolver(text);
    let candidates = T::builtin_entries()
        .iter()
        .filter(|entry| !config.is_disabled(entry.name));
    let added = registry.register_providers(candidates, T::NAME);

    info!(
        capability = T::NAME,
        added,
        available = T::builtin_entries().len(),
        "Provider registry ready"
    );
    registry
}

fn warn_unknown_disabled(config: &RegistryConfig) {
    let known = |name: &str| {
        <dyn ImageProvider as Capability>::builtin_entries()
            .iter()
            .map(|entry| entry.name)
            .chain(
                <dyn MetadataProvider as Capability>::builtin_entries()
                    .iter()
                    .map(|entry| entry.name),
            )
            .any(|entry| entry.eq_ignore_ascii_case(name))
    };

    for name in &config.disabled_providers {
        if !known(name) {
            warn!(provider = %name, "Disabled provider is not a known provider");
        }
    }
}
