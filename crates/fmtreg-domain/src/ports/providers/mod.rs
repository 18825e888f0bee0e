//! Provider Capability Ports
//!
//! Interfaces that concrete providers implement. A registry is built per
//! capability, e.g. `ProviderRegistry<dyn ImageProvider>`.
//!
//! | Port | Description |
//! |------|-------------|
//! | ImageProvider | Page images from containers (archives, PDF, folders) |
//! | MetadataProvider | Book metadata from sidecar documents |

/// Image provider port
pub mod image;
/// Metadata provider port
pub mod metadata;

pub use image::ImageProvider;
pub use metadata::MetadataProvider;
