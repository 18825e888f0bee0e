//! Image Provider Implementations
//!
//! Providers reading page images out of a container source.
//!
//! ## Available Providers
//!
//! | Provider | Formats | Requirement |
//! |----------|---------|-------------|
//! | [`ZipImageProvider`] | cbz, zip | - |
//! | [`RarImageProvider`] | cbr, rar | - |
//! | [`SevenZipImageProvider`] | cb7, 7z | `7z` or `7za` on `PATH` |
//! | [`PdfImageProvider`] | pdf | - |
//! | [`FolderImageProvider`] | directory sources | - |

pub mod folder;
pub mod pdf;
pub mod rar;
pub mod seven_zip;
pub mod zip;

pub use folder::FolderImageProvider;
pub use pdf::PdfImageProvider;
pub use rar::RarImageProvider;
pub use seven_zip::SevenZipImageProvider;
pub use zip::ZipImageProvider;

use fmtreg_domain::ports::ImageProvider;

/// Validity probe shared by the image provider entries
pub(crate) fn validate(provider: &(dyn ImageProvider + 'static)) -> bool {
    provider.is_valid()
}
