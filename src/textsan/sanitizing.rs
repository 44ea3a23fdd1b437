//! Text normalization
//!
//! A [`Sanitizer`] maps raw text to its normalized form. Sanitizers are pure and
//! total: empty input yields empty output and nothing can fail. New normalization
//! rules plug in by implementing the same trait.

/// Replacement written for every horizontal tab.
pub const TAB_REPLACEMENT: &str = "____";

/// Transforms raw text into sanitized text.
pub trait Sanitizer {
    fn sanitize(&self, text: &str) -> String;
}

/// Lowercases the text and replaces every tab with [`TAB_REPLACEMENT`].
///
/// Lowercasing uses the locale-independent Unicode mapping. Tabs are substituted
/// literally (one tab, four underscores) rather than expanded to a column stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicSanitizer;

impl Sanitizer for BasicSanitizer {
    fn sanitize(&self, text: &str) -> String {
        if text.is_empty() {
            tracing::warn!("empty text received for sanitization");
            return String::new();
        }

        let sanitized = text.to_lowercase().replace('\t', TAB_REPLACEMENT);
        tracing::info!("text sanitization completed");
        sanitized
    }
}
