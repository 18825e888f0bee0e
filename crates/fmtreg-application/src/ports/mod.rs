//! Application ports
//!
//! Discovery slices through which provider crates plug into the registry.

pub mod registry;
