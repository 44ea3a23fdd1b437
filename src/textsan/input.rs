//! Input acquisition
//!
//! An [`InputSource`] produces the raw text for a single pipeline run. Sources never
//! fail: an unreadable file is logged and read as empty text, so the rest of the
//! pipeline still runs and produces a well-formed (empty) report.
//!
//! [`Source::classify`] turns the configured `source` string into a concrete variant:
//!
//! 1. the keyword `"sample"` selects the built-in [`SampleSource`]
//! 2. a path to an existing regular file selects [`FileSource`]
//! 3. anything else is taken literally as the text to process ([`StringSource`])

pub mod sample;

use std::fs;
use std::path::{Path, PathBuf};

pub use sample::SampleSource;

/// Keyword that selects the built-in sample text.
pub const SAMPLE_KEYWORD: &str = "sample";

/// Produces the raw text for a pipeline run.
pub trait InputSource {
    /// Read the text. Failures are logged and yield an empty string.
    fn read(&self) -> String;
}

/// Uses the configured value itself as the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSource {
    text: String,
}

impl StringSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl InputSource for StringSource {
    fn read(&self) -> String {
        tracing::debug!(chars = self.text.chars().count(), "using literal text input");
        self.text.clone()
    }
}

/// Reads a UTF-8 file, converting `\r\n` and lone `\r` line endings to `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputSource for FileSource {
    fn read(&self) -> String {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let content = normalize_newlines(content);
                tracing::info!(
                    path = %self.path.display(),
                    chars = content.chars().count(),
                    "read input file"
                );
                content
            }
            Err(err) => {
                tracing::error!(path = %self.path.display(), error = %err, "error reading file");
                String::new()
            }
        }
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// The input variant selected for a configured `source` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Sample(SampleSource),
    File(FileSource),
    Literal(StringSource),
}

impl Source {
    /// Select the input variant for `source`.
    ///
    /// The file check happens before the literal fallback, so a string that happens
    /// to name an existing file is always read from disk.
    pub fn classify(source: &str) -> Self {
        if source == SAMPLE_KEYWORD {
            return Source::Sample(SampleSource);
        }

        if Path::new(source).is_file() {
            return Source::File(FileSource::new(source));
        }

        tracing::warn!(
            source,
            "source is not recognized as a file, treating it as raw text"
        );
        Source::Literal(StringSource::new(source))
    }
}

impl InputSource for Source {
    fn read(&self) -> String {
        match self {
            Source::Sample(sample) => sample.read(),
            Source::File(file) => file.read(),
            Source::Literal(literal) => literal.read(),
        }
    }
}
