//! Run configuration
//!
//! Settings come from the command line or, when `--config` names a JSON file, from
//! that file alone: the file replaces the command-line values instead of being
//! merged with them. After resolution an absent or empty `source` falls back to the
//! built-in sample.
//!
//! ```json
//! { "source": "notes.txt", "target": "report.txt", "statistics": "basic" }
//! ```

use crate::textsan::input::SAMPLE_KEYWORD;
use crate::textsan::statistics::StatisticsKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: String,
    pub target: Option<String>,
    pub statistics: StatisticsKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: SAMPLE_KEYWORD.to_string(),
            target: None,
            statistics: StatisticsKind::default(),
        }
    }
}

/// Contents of a JSON config file. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub source: Option<String>,
    pub target: Option<String>,
    pub statistics: Option<StatisticsKind>,
}

/// Values taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub source: Option<String>,
    pub target: Option<String>,
    pub config: Option<PathBuf>,
    pub statistics: Option<StatisticsKind>,
    pub verbose: u8,
    pub quiet: bool,
}

/// Build the command-line interface.
pub fn command() -> Command {
    Command::new("textsan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sanitize text and report character, word and line statistics")
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .help("Source file path, literal text, or 'sample' for the built-in sample"),
        )
        .arg(
            Arg::new("target")
                .long("target")
                .short('t')
                .help("Target file path (prints to the console when omitted)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("JSON config file; replaces the other options entirely"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .value_parser(["basic", "enhanced"])
                .help("Statistics generator to use (default: enhanced)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v debug, -vv trace)"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Disable logging"),
        )
}

impl CliArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            source: matches.get_one::<String>("source").cloned(),
            target: matches.get_one::<String>("target").cloned(),
            config: matches.get_one::<PathBuf>("config").cloned(),
            statistics: matches
                .get_one::<String>("stats")
                .and_then(|s| s.parse().ok()),
            verbose: matches.get_count("verbose"),
            quiet: matches.get_flag("quiet"),
        }
    }
}

/// Read and parse a JSON config file.
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the settings for a run.
///
/// A config file that cannot be read or parsed is logged and treated as empty, so
/// the run proceeds with the defaults.
pub fn resolve(cli: &CliArgs) -> Settings {
    let chosen = match &cli.config {
        Some(path) => match load_file(path) {
            Ok(file) => {
                tracing::info!(path = %path.display(), "loaded configuration");
                file
            }
            Err(err) => {
                tracing::error!(error = %err, "error loading config file");
                FileConfig::default()
            }
        },
        None => FileConfig {
            source: cli.source.clone(),
            target: cli.target.clone(),
            statistics: cli.statistics,
        },
    };

    let source = match chosen.source {
        Some(source) if !source.is_empty() => source,
        _ => {
            tracing::info!("no source provided, using sample data");
            SAMPLE_KEYWORD.to_string()
        }
    };

    Settings {
        source,
        target: chosen.target.filter(|t| !t.is_empty()),
        statistics: chosen.statistics.unwrap_or_default(),
    }
}
