//! Provider Constants
//!
//! Format identities declared by the built-in providers. Ids are unique
//! per capability registry.

// ============================================================================
// IMAGE FORMATS
// ============================================================================

/// Zip comic archive format id
pub const FORMAT_ID_ZIP: i32 = 1;

/// Zip comic archive display name
pub const FORMAT_NAME_ZIP: &str = "Comic Book Zip";

/// RAR comic archive format id
pub const FORMAT_ID_RAR: i32 = 2;

/// RAR comic archive display name
pub const FORMAT_NAME_RAR: &str = "Comic Book RAR";

/// 7z comic archive format id
pub const FORMAT_ID_SEVEN_ZIP: i32 = 3;

/// 7z comic archive display name
pub const FORMAT_NAME_SEVEN_ZIP: &str = "Comic Book 7z";

/// PDF document format id
pub const FORMAT_ID_PDF: i32 = 4;

/// PDF document display name
pub const FORMAT_NAME_PDF: &str = "PDF";

/// Image folder format id
pub const FORMAT_ID_FOLDER: i32 = 5;

/// Image folder display name
pub const FORMAT_NAME_FOLDER: &str = "Image Folder";

// ============================================================================
// METADATA FORMATS
// ============================================================================

/// ComicInfo.xml sidecar format id
pub const FORMAT_ID_COMIC_INFO: i32 = 100;

/// ComicInfo.xml sidecar display name
pub const FORMAT_NAME_COMIC_INFO: &str = "ComicInfo";

/// Globs recognizing ComicInfo.xml at any depth
///
/// The second pattern covers `\`-separated sources, which globset does not
/// split on outside Windows.
pub const COMIC_INFO_GLOBS: &[&str] = &["**/ComicInfo.xml", r"*[\]ComicInfo.xml"];

/// NFO sidecar format id
pub const FORMAT_ID_NFO: i32 = 101;

/// NFO sidecar display name
pub const FORMAT_NAME_NFO: &str = "NFO";

// ============================================================================
// EXTERNAL TOOLS
// ============================================================================

/// Executables accepted as the 7-Zip command line tool
pub const SEVEN_ZIP_EXECUTABLES: &[&str] = &["7z", "7za"];
