//! # Domain Layer
//!
//! Core types of fmtreg: file formats, provider identity, dialog filters,
//! the capability ports providers implement and the domain error type.
//!
//! This crate has no knowledge of how providers are registered or
//! discovered; that lives in `fmtreg-application`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{DialogFilter, DialogFilterEntry, FileFormat, FormatMatcher, ProviderType};
