//! NFO sidecar provider

use std::sync::Arc;

use fmtreg_application::ports::registry::{METADATA_PROVIDERS, MetadataProviderEntry};
use fmtreg_domain::constants::CAPABILITY_METADATA;
use fmtreg_domain::error::Result;
use fmtreg_domain::ports::MetadataProvider;
use fmtreg_domain::{FileFormat, ProviderType};

use crate::constants::{FORMAT_ID_NFO, FORMAT_NAME_NFO};

/// Metadata provider for `.nfo` release notes
#[derive(Debug, Clone, Default)]
pub struct NfoProvider;

impl NfoProvider {
    /// Create a new NFO provider
    pub fn new() -> Self {
        Self
    }

    /// Formats handled by this provider
    pub fn formats() -> Vec<FileFormat> {
        vec![FileFormat::new(FORMAT_ID_NFO, FORMAT_NAME_NFO, ["nfo"])]
    }
}

impl MetadataProvider for NfoProvider {
    fn provider_name(&self) -> &str {
        "nfo"
    }
}

fn nfo_factory() -> Result<Arc<dyn MetadataProvider>> {
    Ok(Arc::new(NfoProvider::new()))
}

#[linkme::distributed_slice(METADATA_PROVIDERS)]
static NFO_PROVIDER: MetadataProviderEntry = MetadataProviderEntry {
    name: "nfo",
    description: "NFO release notes",
    provider_type: ProviderType::of::<NfoProvider>,
    capabilities: &[CAPABILITY_METADATA],
    constructor: Some(nfo_factory),
    validate: Some(super::validate),
    formats: NfoProvider::formats,
};
