//! Registries populated from the link-time discovery slices

// Force linking so the distributed slices are populated
extern crate fmtreg_providers;

use fmtreg_application::{
    IMAGE_PROVIDERS, METADATA_PROVIDERS, ProviderRegistry, list_image_providers,
    list_metadata_providers,
};
use fmtreg_domain::ports::{ImageProvider, MetadataProvider};

#[test]
fn test_slices_are_populated() {
    assert!(!IMAGE_PROVIDERS.is_empty());
    assert!(!METADATA_PROVIDERS.is_empty());
    assert_eq!(list_image_providers().len(), IMAGE_PROVIDERS.len());
    assert_eq!(list_metadata_providers().len(), METADATA_PROVIDERS.len());
}

#[test]
fn test_entries_declare_their_capability() {
    assert!(IMAGE_PROVIDERS.iter().all(|entry| entry.has_capability("image")));
    assert!(
        METADATA_PROVIDERS
            .iter()
            .all(|entry| entry.has_capability("metadata"))
    );
}

#[test]
fn test_register_builtin_image_providers() {
    let registry = ProviderRegistry::<dyn ImageProvider>::new();
    let added = registry.register_builtin_providers();

    assert!(added >= 4, "Zip, RAR, PDF and Folder need no external tools");
    assert_eq!(registry.len(), added);
    assert_eq!(registry.register_builtin_providers(), 0);
    assert_eq!(registry.source_format_name("issue.cbz"), "Comic Book Zip");
}

#[test]
fn test_register_builtin_metadata_providers() {
    let registry = ProviderRegistry::<dyn MetadataProvider>::new();
    assert_eq!(registry.register_builtin_providers(), METADATA_PROVIDERS.len());
    assert!(registry.create_source_provider("info.nfo").is_some());
}

#[test]
fn test_capability_registries_are_independent() {
    let images = ProviderRegistry::<dyn ImageProvider>::new();
    images.register_builtin_providers();

    let metadata = ProviderRegistry::<dyn MetadataProvider>::new();
    assert!(metadata.is_empty());
    assert_eq!(metadata.source_format_name("issue.cbz"), "Unknown");
}
