//! Image Provider Registry
//!
//! Auto-registration system for image providers using linkme distributed slices.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime.

use fmtreg_domain::constants::CAPABILITY_IMAGE;
use fmtreg_domain::ports::ImageProvider;

use crate::registry::{Capability, ProviderEntry};

/// Registry entry for image providers
///
/// Each image provider implementation registers itself with this entry
/// using `#[linkme::distributed_slice(IMAGE_PROVIDERS)]`.
pub type ImageProviderEntry = ProviderEntry<dyn ImageProvider>;

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static IMAGE_PROVIDERS: [ImageProviderEntry] = [..];

impl Capability for dyn ImageProvider {
    const NAME: &'static str = CAPABILITY_IMAGE;

    fn builtin_entries() -> &'static [ProviderEntry<Self>] {
        &IMAGE_PROVIDERS
    }
}

/// List all registered image providers
///
/// Returns a list of (name, description) tuples for all registered
/// image providers. Useful for CLI help.
pub fn list_image_providers() -> Vec<(&'static str, &'static str)> {
    IMAGE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
