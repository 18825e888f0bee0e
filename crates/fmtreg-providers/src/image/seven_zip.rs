//! 7z comic archive provider
//!
//! Extraction is delegated to the 7-Zip command line tool, so the provider
//! only reports itself valid when an executable `7z` or `7za` can be found
//! on `PATH`.

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;

use fmtreg_application::ports::registry::{IMAGE_PROVIDERS, ImageProviderEntry};
use fmtreg_domain::constants::CAPABILITY_IMAGE;
use fmtreg_domain::error::{Error, Result};
use fmtreg_domain::ports::ImageProvider;
use fmtreg_domain::{FileFormat, ProviderType};
use tracing::debug;

use crate::constants::{FORMAT_ID_SEVEN_ZIP, FORMAT_NAME_SEVEN_ZIP, SEVEN_ZIP_EXECUTABLES};

/// Image provider for 7z based comic archives
#[derive(Debug, Clone, Default)]
pub struct SevenZipImageProvider {
    executable: Option<PathBuf>,
}

impl SevenZipImageProvider {
    /// Create a provider using the 7-Zip tool found on `PATH`
    pub fn new() -> Self {
        Self::resolve(|name| which::which(name))
    }

    /// Create a provider using the 7-Zip tool found in `search_path`
    ///
    /// `search_path` uses the platform `PATH` syntax.
    pub fn in_search_path(search_path: impl AsRef<OsStr>) -> Self {
        let cwd = env::current_dir().unwrap_or_default();
        Self::resolve(|name| which::which_in(name, Some(search_path.as_ref()), &cwd))
    }

    fn resolve(lookup: impl Fn(&str) -> which::Result<PathBuf>) -> Self {
        let executable = SEVEN_ZIP_EXECUTABLES
            .iter()
            .find_map(|name| lookup(name).ok());
        match &executable {
            Some(path) => debug!(executable = %path.display(), "Resolved 7-Zip executable"),
            None => debug!(candidates = ?SEVEN_ZIP_EXECUTABLES, "7-Zip executable not found"),
        }
        Self { executable }
    }

    /// Create a provider bound to an explicit executable
    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: Some(executable.into()),
        }
    }

    /// The 7-Zip executable in use, if any
    pub fn executable(&self) -> Option<&PathBuf> {
        self.executable.as_ref()
    }

    /// Formats handled by this provider
    pub fn formats() -> Vec<FileFormat> {
        vec![FileFormat::new(
            FORMAT_ID_SEVEN_ZIP,
            FORMAT_NAME_SEVEN_ZIP,
            ["cb7", "7z"],
        )]
    }
}

impl ImageProvider for SevenZipImageProvider {
    fn provider_name(&self) -> &str {
        "7z"
    }

    fn is_valid(&self) -> bool {
        // `which` checks the execute permission too
        self.executable
            .as_ref()
            .is_some_and(|path| which::which(path).is_ok())
    }
}

fn seven_zip_factory() -> Result<Arc<dyn ImageProvider>> {
    let provider = SevenZipImageProvider::new();
    if provider.executable().is_none() {
        return Err(Error::provider_unavailable(
            "SevenZipImageProvider",
            format!("none of {SEVEN_ZIP_EXECUTABLES:?} found on PATH"),
        ));
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(IMAGE_PROVIDERS)]
static SEVEN_ZIP_PROVIDER: ImageProviderEntry = ImageProviderEntry {
    name: "7z",
    description: "7z comic archives via the 7-Zip tool (cb7, 7z)",
    provider_type: ProviderType::of::<SevenZipImageProvider>,
    capabilities: &[CAPABILITY_IMAGE],
    constructor: Some(seven_zip_factory),
    validate: Some(super::validate),
    formats: SevenZipImageProvider::formats,
};
