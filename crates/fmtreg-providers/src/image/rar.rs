//! RAR comic archive provider

use std::sync::Arc;

use fmtreg_application::ports::registry::{IMAGE_PROVIDERS, ImageProviderEntry};
use fmtreg_domain::constants::CAPABILITY_IMAGE;
use fmtreg_domain::error::Result;
use fmtreg_domain::ports::ImageProvider;
use fmtreg_domain::{FileFormat, ProviderType};

use crate::constants::{FORMAT_ID_RAR, FORMAT_NAME_RAR};

/// Image provider for RAR based comic archives (read only)
#[derive(Debug, Clone, Default)]
pub struct RarImageProvider;

impl RarImageProvider {
    /// Create a new RAR provider
    pub fn new() -> Self {
        Self
    }

    /// Formats handled by this provider
    pub fn formats() -> Vec<FileFormat> {
        vec![FileFormat::new(FORMAT_ID_RAR, FORMAT_NAME_RAR, ["cbr", "rar"])]
    }
}

impl ImageProvider for RarImageProvider {
    fn provider_name(&self) -> &str {
        "rar"
    }
}

fn rar_factory() -> Result<Arc<dyn ImageProvider>> {
    Ok(Arc::new(RarImageProvider::new()))
}

#[linkme::distributed_slice(IMAGE_PROVIDERS)]
static RAR_PROVIDER: ImageProviderEntry = ImageProviderEntry {
    name: "rar",
    description: "RAR comic archives (cbr, rar)",
    provider_type: ProviderType::of::<RarImageProvider>,
    capabilities: &[CAPABILITY_IMAGE],
    constructor: Some(rar_factory),
    validate: Some(super::validate),
    formats: RarImageProvider::formats,
};
