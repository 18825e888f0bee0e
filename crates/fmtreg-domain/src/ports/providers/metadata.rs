//! Metadata provider port

/// Provider of book metadata read from sidecar documents
pub trait MetadataProvider: Send + Sync {
    /// Short provider name for diagnostics
    fn provider_name(&self) -> &str;

    /// Whether the provider can run in this environment
    fn is_valid(&self) -> bool {
        true
    }
}
