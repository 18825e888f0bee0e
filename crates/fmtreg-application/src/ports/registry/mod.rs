//! Provider Discovery Slices
//!
//! Declares the compile-time registration slices that built-in providers
//! submit themselves into, one per capability.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(IMAGE_...)]  │
//! │                        static ENTRY: ImageProviderEntry = ...   │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static IMAGE_PROVIDERS: [..] = [..]  │
//! │                              ↓                                  │
//! │  3. Bootstrap calls:   registry.register_providers(slice, cap)  │
//! │                              ↓                                  │
//! │  4. Callers resolve:   registry.create_source_provider(path)    │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Provider (in fmtreg-providers)
//!
//! ```ignore
//! use fmtreg_application::ports::registry::{ImageProviderEntry, IMAGE_PROVIDERS};
//!
//! #[linkme::distributed_slice(IMAGE_PROVIDERS)]
//! static ZIP_PROVIDER: ImageProviderEntry = ImageProviderEntry {
//!     name: "zip",
//!     description: "Zip archives (cbz, zip)",
//!     provider_type: ProviderType::of::<ZipImageProvider>,
//!     capabilities: &[CAPABILITY_IMAGE],
//!     constructor: Some(zip_factory),
//!     validate: Some(validate),
//!     formats: ZipImageProvider::formats,
//! };
//! ```

pub mod image;
pub mod metadata;

// Re-export all registry types and functions
pub use image::{IMAGE_PROVIDERS, ImageProviderEntry, list_image_providers};
pub use metadata::{METADATA_PROVIDERS, MetadataProviderEntry, list_metadata_providers};
