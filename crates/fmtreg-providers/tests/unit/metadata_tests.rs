//! Built-in metadata providers

use fmtreg_application::{ProviderRegistry, list_metadata_providers};
use fmtreg_domain::ProviderType;
use fmtreg_providers::MetadataProvider;
use fmtreg_providers::metadata::{ComicInfoProvider, NfoProvider};

fn builtin_registry() -> ProviderRegistry<dyn MetadataProvider> {
    let registry = ProviderRegistry::<dyn MetadataProvider>::new();
    registry.register_builtin_providers();
    registry
}

#[test]
fn test_metadata_providers_are_registered() {
    let names: Vec<&str> = list_metadata_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert!(names.contains(&"comicinfo"));
    assert!(names.contains(&"nfo"));

    let registry = builtin_registry();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_comic_info_is_matched_by_name() {
    let registry = builtin_registry();

    for source in ["ComicInfo.xml", "book/ComicInfo.xml", "book/comicinfo.XML"] {
        assert_eq!(
            registry.source_provider_type(source),
            Some(ProviderType::of::<ComicInfoProvider>()),
            "{source} should resolve to ComicInfo"
        );
    }
    assert_eq!(registry.source_provider_type("book/series.xml"), None);
}

#[test]
fn test_comic_info_in_backslash_separated_paths() {
    let registry = builtin_registry();

    for source in [r"C:\books\ComicInfo.xml", r"C:\books\Saga\comicinfo.xml"] {
        assert_eq!(
            registry.source_provider_type(source),
            Some(ProviderType::of::<ComicInfoProvider>()),
            "{source} should resolve to ComicInfo"
        );
        assert_eq!(registry.source_format_name(source), "ComicInfo");
    }
    assert_eq!(registry.source_provider_type(r"C:\books\NotComicInfo.xml"), None);
    assert_eq!(registry.source_provider_type(r"C:\books\series.xml"), None);
}

#[test]
fn test_nfo_resolution() {
    let registry = builtin_registry();

    assert_eq!(
        registry.source_provider_type("release.NFO"),
        Some(ProviderType::of::<NfoProvider>())
    );
    assert_eq!(
        registry.format_provider_type_by_id(100),
        Some(ProviderType::of::<ComicInfoProvider>())
    );
    assert_eq!(
        registry.format_provider_type_by_id(101),
        Some(ProviderType::of::<NfoProvider>())
    );
}

#[test]
fn test_metadata_dialog_filter() {
    let registry = builtin_registry();
    assert_eq!(
        registry.dialog_filter(false, true),
        "ComicInfo (*.xml)|*.xml|NFO (*.nfo)|*.nfo"
    );
}
