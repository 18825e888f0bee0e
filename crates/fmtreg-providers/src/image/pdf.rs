//! PDF document provider

use std::sync::Arc;

use fmtreg_application::ports::registry::{IMAGE_PROVIDERS, ImageProviderEntry};
use fmtreg_domain::constants::CAPABILITY_IMAGE;
use fmtreg_domain::error::Result;
use fmtreg_domain::ports::ImageProvider;
use fmtreg_domain::{FileFormat, ProviderType};

use crate::constants::{FORMAT_ID_PDF, FORMAT_NAME_PDF};

/// Image provider rendering the pages of PDF documents
#[derive(Debug, Clone, Default)]
pub struct PdfImageProvider;

impl PdfImageProvider {
    /// Create a new PDF provider
    pub fn new() -> Self {
        Self
    }

    /// Formats handled by this provider
    pub fn formats() -> Vec<FileFormat> {
        vec![FileFormat::new(FORMAT_ID_PDF, FORMAT_NAME_PDF, ["pdf"])]
    }
}

impl ImageProvider for PdfImageProvider {
    fn provider_name(&self) -> &str {
        "pdf"
    }
}

fn pdf_factory() -> Result<Arc<dyn ImageProvider>> {
    Ok(Arc::new(PdfImageProvider::new()))
}

#[linkme::distributed_slice(IMAGE_PROVIDERS)]
static PDF_PROVIDER: ImageProviderEntry = ImageProviderEntry {
    name: "pdf",
    description: "PDF documents (pdf)",
    provider_type: ProviderType::of::<PdfImageProvider>,
    capabilities: &[CAPABILITY_IMAGE],
    constructor: Some(pdf_factory),
    validate: Some(super::validate),
    formats: PdfImageProvider::formats,
};
