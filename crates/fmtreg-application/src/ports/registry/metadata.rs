//! Metadata Provider Registry
//!
//! Auto-registration system for metadata providers.

use fmtreg_domain::constants::CAPABILITY_METADATA;
use fmtreg_domain::ports::MetadataProvider;

use crate::registry::{Capability, ProviderEntry};

/// Registry entry for metadata providers
pub type MetadataProviderEntry = ProviderEntry<dyn MetadataProvider>;

#[linkme::distributed_slice]
pub static METADATA_PROVIDERS: [MetadataProviderEntry] = [..];

impl Capability for dyn MetadataProvider {
    const NAME: &'static str = CAPABILITY_METADATA;

    fn builtin_entries() -> &'static [ProviderEntry<Self>] {
        &METADATA_PROVIDERS
    }
}

/// List all registered metadata providers as (name, description) tuples
pub fn list_metadata_providers() -> Vec<(&'static str, &'static str)> {
    METADATA_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
