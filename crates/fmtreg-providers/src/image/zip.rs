//! Zip comic archive provider

use std::sync::Arc;

use fmtreg_application::ports::registry::{IMAGE_PROVIDERS, ImageProviderEntry};
use fmtreg_domain::constants::CAPABILITY_IMAGE;
use fmtreg_domain::error::Result;
use fmtreg_domain::ports::ImageProvider;
use fmtreg_domain::{FileFormat, ProviderType};

use crate::constants::{FORMAT_ID_ZIP, FORMAT_NAME_ZIP};

/// Image provider for zip based comic archives
///
/// Zip archives are handled in-process, so the provider is always valid
/// and can write new archives.
#[derive(Debug, Clone, Default)]
pub struct ZipImageProvider;

impl ZipImageProvider {
    /// Create a new zip provider
    pub fn new() -> Self {
        Self
    }

    /// Formats handled by this provider
    pub fn formats() -> Vec<FileFormat> {
        vec![FileFormat::new(FORMAT_ID_ZIP, FORMAT_NAME_ZIP, ["cbz", "zip"])]
    }
}

impl ImageProvider for ZipImageProvider {
    fn provider_name(&self) -> &str {
        "zip"
    }

    fn can_write(&self) -> bool {
        true
    }
}

fn zip_factory() -> Result<Arc<dyn ImageProvider>> {
    Ok(Arc::new(ZipImageProvider::new()))
}

#[linkme::distributed_slice(IMAGE_PROVIDERS)]
static ZIP_PROVIDER: ImageProviderEntry = ImageProviderEntry {
    name: "zip",
    description: "Zip comic archives (cbz, zip)",
    provider_type: ProviderType::of::<ZipImageProvider>,
    capabilities: &[CAPABILITY_IMAGE],
    constructor: Some(zip_factory),
    validate: Some(super::validate),
    formats: ZipImageProvider::formats,
};
