//! Built-in sample text
//!
//! The sample is deterministic and touches every case the sanitizer and the
//! statistics generators handle: mixed case (ASCII and non-ASCII), single tabs and
//! tab runs, digits, punctuation, an empty line, letters outside the Latin alphabet,
//! and one line far longer than the rest.

use super::InputSource;

const SAMPLE_LINES: &[&str] = &[
    "This is a SAMPLE text with MIXED case.",
    "It contains\ttabs\tand\tspaces.",
    "Some numbers 123 and special ch@r@cters!",
    "",
    "Another line with\tmore\ttabs.",
    "THE END OF THE SAMPLE.",
    "\t\t\tMultiple tabs at the beginning",
    "Line with unicode: € £ ¥ § ツ ÑANDÚ Ærø",
];

const LONG_LINE_PREFIX: &str = "Line with very long text ";
const LONG_LINE_RUN: usize = 100;

/// Number of lines in the generated sample.
pub const SAMPLE_LINE_COUNT: usize = SAMPLE_LINES.len() + 1;

/// Generates the built-in sample text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleSource;

impl SampleSource {
    /// Build the sample text.
    pub fn text() -> String {
        let long_line = format!("{}{}", LONG_LINE_PREFIX, "a".repeat(LONG_LINE_RUN));
        let mut lines: Vec<&str> = SAMPLE_LINES.to_vec();
        lines.push(&long_line);
        lines.join("\n")
    }
}

impl InputSource for SampleSource {
    fn read(&self) -> String {
        let text = Self::text();
        tracing::info!(chars = text.chars().count(), "generated sample data");
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_deterministic() {
        assert_eq!(SampleSource.read(), SampleSource.read());
    }

    #[test]
    fn test_sample_covers_edge_cases() {
        let text = SampleSource::text();

        assert!(text.chars().any(|c| c.is_uppercase()));
        assert!(text.chars().any(|c| c.is_lowercase()));
        assert!(text.contains('\t'));
        assert!(text.contains("\t\t\t"));
        assert!(text.chars().any(|c| c.is_ascii_digit()));
        assert!(text.contains('@') && text.contains('!'));
        assert!(text.contains("\n\n"));
        assert!(text.chars().any(|c| c.is_alphabetic() && !c.is_ascii()));
        assert!(text.chars().any(|c| c.is_uppercase() && !c.is_ascii()));
    }

    #[test]
    fn test_sample_has_one_long_line() {
        let text = SampleSource::text();
        let lengths: Vec<usize> = text.lines().map(|l| l.chars().count()).collect();
        let longest = *lengths.iter().max().unwrap();

        assert_eq!(longest, LONG_LINE_PREFIX.len() + LONG_LINE_RUN);
        assert!(lengths.iter().filter(|&&len| len * 2 < longest).count() == lengths.len() - 1);
    }

    #[test]
    fn test_sample_line_count() {
        let text = SampleSource::text();
        assert_eq!(text.matches('\n').count() + 1, SAMPLE_LINE_COUNT);
    }
}
