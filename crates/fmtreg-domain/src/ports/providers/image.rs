//! Image provider port

/// Provider of page images for a container format
pub trait ImageProvider: Send + Sync {
    /// Short provider name for diagnostics
    fn provider_name(&self) -> &str;

    /// Whether the provider can run in this environment
    ///
    /// Checked on a probe instance before registration; providers that
    /// depend on an external tool return `false` when it is missing.
    fn is_valid(&self) -> bool {
        true
    }

    /// Whether the provider can write containers of its formats
    fn can_write(&self) -> bool {
        false
    }
}
