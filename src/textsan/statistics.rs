//! Statistics generation
//!
//! A [`StatisticsGenerator`] computes a [`StatisticsReport`] from sanitized text.
//! Generators never fail at their boundary: empty input yields
//! [`StatisticsReport::empty`], and an internal [`StatisticsError`] is logged and
//! turned into [`StatisticsReport::degraded`].
//!
//! Two generators are provided:
//!
//! - [`AlphabetCounter`]: one entry per distinct alphabetic character, sorted by
//!   character, followed by `total_characters`
//! - [`EnhancedStatistics`]: the alphabet counts plus character-class, word and
//!   line aggregates
//!
//! Aggregate keys are multi-character names and per-character keys are single
//! characters, so the two never collide. The report enforces this anyway and a
//! collision surfaces as [`StatisticsError::KeyCollision`].

pub mod basic;
pub mod enhanced;
pub mod report;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use basic::AlphabetCounter;
pub use enhanced::EnhancedStatistics;
pub use report::{Metric, StatisticsReport};

/// Errors raised while computing statistics. Never escapes a generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("metric '{0}' is already present in the report")]
    KeyCollision(String),
    #[error("character classes sum to {classified} but the text has {total} characters")]
    ClassMismatch { classified: u64, total: u64 },
}

/// Computes statistics over sanitized text.
pub trait StatisticsGenerator {
    fn generate(&self, text: &str) -> StatisticsReport;
}

/// The class of a single character.
///
/// Classification is exclusive and exhaustive: checks run in declaration order and
/// the first match wins, so a character that is both alphabetic and numeric (such
/// as a Roman numeral letter) counts once, as alphabetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Alphabetic,
    Numeric,
    Whitespace,
    Special,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_alphabetic() {
            CharClass::Alphabetic
        } else if c.is_numeric() {
            CharClass::Numeric
        } else if c.is_whitespace() {
            CharClass::Whitespace
        } else {
            CharClass::Special
        }
    }
}

/// Which generator a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatisticsKind {
    Basic,
    #[default]
    Enhanced,
}

impl StatisticsKind {
    pub fn generator(self) -> Box<dyn StatisticsGenerator> {
        match self {
            StatisticsKind::Basic => Box::new(AlphabetCounter),
            StatisticsKind::Enhanced => Box::new(EnhancedStatistics::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StatisticsKind::Basic => "basic",
            StatisticsKind::Enhanced => "enhanced",
        }
    }
}

impl fmt::Display for StatisticsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatisticsKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(StatisticsKind::Basic),
            "enhanced" => Ok(StatisticsKind::Enhanced),
            other => Err(format!(
                "unknown statistics generator '{}' (expected 'basic' or 'enhanced')",
                other
            )),
        }
    }
}

/// Log a computation failure and fall back to the degraded report.
fn degrade(err: StatisticsError) -> StatisticsReport {
    tracing::error!(error = %err, "error generating statistics");
    StatisticsReport::degraded(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_class() {
        assert_eq!(CharClass::of('a'), CharClass::Alphabetic);
        assert_eq!(CharClass::of('ツ'), CharClass::Alphabetic);
        assert_eq!(CharClass::of('7'), CharClass::Numeric);
        assert_eq!(CharClass::of('½'), CharClass::Numeric);
        assert_eq!(CharClass::of(' '), CharClass::Whitespace);
        assert_eq!(CharClass::of('\n'), CharClass::Whitespace);
        assert_eq!(CharClass::of('_'), CharClass::Special);
        assert_eq!(CharClass::of('€'), CharClass::Special);
    }

    #[test]
    fn test_alphabetic_wins_over_numeric() {
        // U+2160 ROMAN NUMERAL ONE is both alphabetic and numeric
        assert!('\u{2160}'.is_numeric());
        assert_eq!(CharClass::of('\u{2160}'), CharClass::Alphabetic);
    }

    #[test]
    fn test_statistics_kind_from_str() {
        assert_eq!("basic".parse::<StatisticsKind>(), Ok(StatisticsKind::Basic));
        assert_eq!(
            "enhanced".parse::<StatisticsKind>(),
            Ok(StatisticsKind::Enhanced)
        );
        assert!("fancy".parse::<StatisticsKind>().is_err());
        assert_eq!(StatisticsKind::default(), StatisticsKind::Enhanced);
    }

    #[test]
    fn test_statistics_kind_deserialize() {
        let kind: StatisticsKind = serde_json::from_str("\"basic\"").unwrap();
        assert_eq!(kind, StatisticsKind::Basic);
    }

    #[test]
    fn test_degrade_keeps_description() {
        let report = degrade(StatisticsError::KeyCollision("x".into()));
        assert_eq!(report.total_characters(), Some(0));
        assert_eq!(report.error(), Some("metric 'x' is already present in the report"));
    }
}
