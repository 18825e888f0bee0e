//! Image folder provider
//!
//! A folder of loose images is addressed by a source ending in a path
//! separator, e.g. `scans/issue-01/`.

use std::sync::Arc;

use fmtreg_application::ports::registry::{IMAGE_PROVIDERS, ImageProviderEntry};
use fmtreg_domain::constants::CAPABILITY_IMAGE;
use fmtreg_domain::error::Result;
use fmtreg_domain::ports::ImageProvider;
use fmtreg_domain::{FileFormat, ProviderType};

use crate::constants::{FORMAT_ID_FOLDER, FORMAT_NAME_FOLDER};

/// Image provider reading the image files of a directory
#[derive(Debug, Clone, Default)]
pub struct FolderImageProvider;

impl FolderImageProvider {
    /// Create a new folder provider
    pub fn new() -> Self {
        Self
    }

    /// Formats handled by this provider
    ///
    /// The folder format has no extensions, so it never shows up in dialog
    /// filters or extension listings.
    pub fn formats() -> Vec<FileFormat> {
        let extensions: [&str; 0] = [];
        vec![
            FileFormat::new(FORMAT_ID_FOLDER, FORMAT_NAME_FOLDER, extensions)
                .with_matcher(is_folder_source),
        ]
    }
}

fn is_folder_source(source: &str) -> bool {
    source.len() > 1 && source.ends_with(['/', '\\'])
}

impl ImageProvider for FolderImageProvider {
    fn provider_name(&self) -> &str {
        "folder"
    }

    fn can_write(&self) -> bool {
        true
    }
}

fn folder_factory() -> Result<Arc<dyn ImageProvider>> {
    Ok(Arc::new(FolderImageProvider::new()))
}

#[linkme::distributed_slice(IMAGE_PROVIDERS)]
static FOLDER_PROVIDER: ImageProviderEntry = ImageProviderEntry {
    name: "folder",
    description: "Folders of loose images",
    provider_type: ProviderType::of::<FolderImageProvider>,
    capabilities: &[CAPABILITY_IMAGE],
    constructor: Some(folder_factory),
    validate: Some(super::validate),
    formats: FolderImageProvider::formats,
};
