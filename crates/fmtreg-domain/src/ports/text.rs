//! Localized text port

/// Resolves user-visible strings by key
///
/// Implementations return `default` when they have no entry for `key`.
pub trait TextResolver: Send + Sync {
    /// Look up the text for `key`
    fn text(&self, key: &str, default: &str) -> String;
}

/// Resolver that always answers with the inline default
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultText;

impl TextResolver for DefaultText {
    fn text(&self, _key: &str, default: &str) -> String {
        default.to_string()
    }
}
