//! Report rendering and output destinations
//!
//! Every sink renders through [`render_report`], so the console and the file
//! destinations receive byte-identical content. Sinks report failures by logging
//! and printing to stderr; they never return an error to the pipeline.

use crate::textsan::statistics::report::TOTAL_CHARACTERS;
use crate::textsan::statistics::StatisticsReport;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Width of the `=` banners delimiting report sections.
pub const BANNER_WIDTH: usize = 50;

/// Renders sanitized text and statistics to a destination.
pub trait OutputSink {
    fn write(&self, text: &str, report: &StatisticsReport);
}

/// Render the human-readable report.
///
/// Layout: a `SANITIZED TEXT:` section with the text verbatim, a `STATISTICS:`
/// section listing every entry except `total_characters` as `'<key>': <value>` in
/// report order, and a closing `Total characters: <n>` line.
pub fn render_report(text: &str, report: &StatisticsReport) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::with_capacity(text.len() + report.len() * 16 + BANNER_WIDTH * 4);

    // Writing into a String cannot fail
    let _ = writeln!(out, "{banner}\nSANITIZED TEXT:\n{banner}");
    out.push_str(text);
    let _ = writeln!(out, "\n\n{banner}\nSTATISTICS:\n{banner}\n");

    out.push_str("Character Frequencies:\n");
    for (key, metric) in report.iter().filter(|(key, _)| *key != TOTAL_CHARACTERS) {
        let _ = writeln!(out, "  '{}': {}", key, metric);
    }

    if let Some(total) = report.total_characters() {
        let _ = writeln!(out, "\nTotal characters: {}", total);
    }

    out
}

/// Writes the report to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write(&self, text: &str, report: &StatisticsReport) {
        let rendered = render_report(text, report);
        let mut stdout = io::stdout().lock();
        match stdout.write_all(rendered.as_bytes()).and_then(|_| stdout.flush()) {
            Ok(()) => tracing::info!("output written to console"),
            Err(err) => {
                tracing::error!(error = %err, "error writing to console");
                eprintln!("Error writing to console: {}", err);
            }
        }
    }
}

/// Writes the report to a file, replacing any existing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_rendered(&self, rendered: &str) -> io::Result<()> {
        let mut file = File::create(&self.path)?;
        file.write_all(rendered.as_bytes())?;
        file.flush()
    }
}

impl OutputSink for FileSink {
    fn write(&self, text: &str, report: &StatisticsReport) {
        let rendered = render_report(text, report);
        match self.write_rendered(&rendered) {
            Ok(()) => {
                println!("Output written to {}", self.path.display());
                tracing::info!(path = %self.path.display(), "output written to file");
            }
            Err(err) => {
                tracing::error!(path = %self.path.display(), error = %err, "error writing to file");
                eprintln!("Error writing to file: {}", err);
            }
        }
    }
}

/// The sink variant selected for a configured target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Console(ConsoleSink),
    File(FileSink),
}

impl Sink {
    /// No target (or an empty one) selects the console.
    pub fn for_target(target: Option<&str>) -> Self {
        match target {
            Some(path) if !path.is_empty() => Sink::File(FileSink::new(path)),
            _ => Sink::Console(ConsoleSink),
        }
    }
}

impl OutputSink for Sink {
    fn write(&self, text: &str, report: &StatisticsReport) {
        match self {
            Sink::Console(console) => console.write(text, report),
            Sink::File(file) => file.write(text, report),
        }
    }
}
