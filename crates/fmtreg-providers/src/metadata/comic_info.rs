//! ComicInfo.xml sidecar provider

use std::sync::Arc;

use fmtreg_application::ports::registry::{METADATA_PROVIDERS, MetadataProviderEntry};
use fmtreg_domain::constants::CAPABILITY_METADATA;
use fmtreg_domain::error::Result;
use fmtreg_domain::ports::MetadataProvider;
use fmtreg_domain::{FileFormat, ProviderType};
use tracing::warn;

use crate::constants::{COMIC_INFO_GLOBS, FORMAT_ID_COMIC_INFO, FORMAT_NAME_COMIC_INFO};

/// Metadata provider for `ComicInfo.xml` documents
///
/// Recognition is by file name, not extension: other XML files are not
/// claimed even though `xml` is listed for dialog filters.
#[derive(Debug, Clone, Default)]
pub struct ComicInfoProvider;

impl ComicInfoProvider {
    /// Create a new ComicInfo provider
    pub fn new() -> Self {
        Self
    }

    /// Formats handled by this provider
    pub fn formats() -> Vec<FileFormat> {
        let format = FileFormat::new(FORMAT_ID_COMIC_INFO, FORMAT_NAME_COMIC_INFO, ["xml"]);
        match format.clone().with_globs(COMIC_INFO_GLOBS) {
            Ok(format) => vec![format],
            Err(e) => {
                warn!(error = %e, "ComicInfo glob rejected, falling back to extension matching");
                vec![format]
            }
        }
    }
}

impl MetadataProvider for ComicInfoProvider {
    fn provider_name(&self) -> &str {
        "comicinfo"
    }
}

fn comic_info_factory() -> Result<Arc<dyn MetadataProvider>> {
    Ok(Arc::new(ComicInfoProvider::new()))
}

#[linkme::distributed_slice(METADATA_PROVIDERS)]
static COMIC_INFO_PROVIDER: MetadataProviderEntry = MetadataProviderEntry {
    name: "comicinfo",
    description: "ComicInfo.xml metadata documents",
    provider_type: ProviderType::of::<ComicInfoProvider>,
    capabilities: &[CAPABILITY_METADATA],
    constructor: Some(comic_info_factory),
    validate: Some(super::validate),
    formats: ComicInfoProvider::formats,
};
