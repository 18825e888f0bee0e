//! Application Layer - fmtreg
//!
//! This crate contains the provider registry: the dispatch mechanism that
//! maps declared file formats to the providers handling them.
//!
//! ## Architecture
//!
//! The application layer:
//! - Owns [`registry::ProviderRegistry`], generic over a capability trait object
//! - Defines the discovery entry type providers submit ([`registry::ProviderEntry`])
//! - Declares the link-time discovery slices ([`ports::registry`])
//! - Has no dependencies on infrastructure or concrete providers
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `fmtreg-domain`: For formats, provider identity and capability ports
//! - `parking_lot`, `linkme`, `tracing`

pub mod ports;
pub mod registry;

pub use ports::registry::{
    IMAGE_PROVIDERS, ImageProviderEntry, METADATA_PROVIDERS, MetadataProviderEntry,
    list_image_providers, list_metadata_providers,
};
pub use registry::{Capability, ProviderEntry, ProviderFactory, ProviderInfo, ProviderRegistry};
