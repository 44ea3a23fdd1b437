//! Character-class, word and line statistics

use super::{
    degrade, AlphabetCounter, CharClass, Metric, StatisticsError, StatisticsGenerator,
    StatisticsReport,
};

pub const ALPHABETIC_CHARS: &str = "alphabetic_chars";
pub const NUMERIC_CHARS: &str = "numeric_chars";
pub const WHITESPACE_CHARS: &str = "whitespace_chars";
pub const SPECIAL_CHARS: &str = "special_chars";
pub const TOTAL_WORDS: &str = "total_words";
pub const AVG_WORD_LENGTH: &str = "avg_word_length";
pub const TOTAL_LINES: &str = "total_lines";
pub const NON_EMPTY_LINES: &str = "non_empty_lines";

/// Alphabet counts followed by aggregate metrics.
///
/// - characters split into [`CharClass`] counts that always sum to `total_characters`
/// - words are maximal runs of non-whitespace; their mean length is rounded to two
///   decimals and is `0.0` when there are no words
/// - lines are split on `\n`, so a trailing newline yields a trailing empty line;
///   a line is non-empty when something other than whitespace remains after trimming
#[derive(Debug, Clone, Default)]
pub struct EnhancedStatistics {
    basic: AlphabetCounter,
}

#[derive(Debug, Default)]
struct ClassCounts {
    alphabetic: u64,
    numeric: u64,
    whitespace: u64,
    special: u64,
}

impl ClassCounts {
    fn from_text(text: &str) -> Self {
        let mut counts = Self::default();
        for c in text.chars() {
            match CharClass::of(c) {
                CharClass::Alphabetic => counts.alphabetic += 1,
                CharClass::Numeric => counts.numeric += 1,
                CharClass::Whitespace => counts.whitespace += 1,
                CharClass::Special => counts.special += 1,
            }
        }
        counts
    }

    fn sum(&self) -> u64 {
        self.alphabetic + self.numeric + self.whitespace + self.special
    }
}

impl EnhancedStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    fn compute(&self, text: &str) -> Result<StatisticsReport, StatisticsError> {
        let mut report = self.basic.compute(text)?;
        let total = report.total_characters().unwrap_or(0);

        let classes = ClassCounts::from_text(text);
        if classes.sum() != total {
            return Err(StatisticsError::ClassMismatch {
                classified: classes.sum(),
                total,
            });
        }

        let (word_count, letters) = text
            .split_whitespace()
            .fold((0u64, 0u64), |(n, len), w| (n + 1, len + w.chars().count() as u64));
        let avg_word_length = if word_count == 0 {
            0.0
        } else {
            round2(letters as f64 / word_count as f64)
        };

        let (line_count, non_empty) = text.split('\n').fold((0u64, 0u64), |(n, filled), line| {
            (n + 1, filled + u64::from(!line.trim().is_empty()))
        });

        let mut aggregates = StatisticsReport::new();
        aggregates.insert(ALPHABETIC_CHARS, Metric::Count(classes.alphabetic))?;
        aggregates.insert(NUMERIC_CHARS, Metric::Count(classes.numeric))?;
        aggregates.insert(WHITESPACE_CHARS, Metric::Count(classes.whitespace))?;
        aggregates.insert(SPECIAL_CHARS, Metric::Count(classes.special))?;
        aggregates.insert(TOTAL_WORDS, Metric::Count(word_count))?;
        aggregates.insert(AVG_WORD_LENGTH, Metric::Average(avg_word_length))?;
        aggregates.insert(TOTAL_LINES, Metric::Count(line_count))?;
        aggregates.insert(NON_EMPTY_LINES, Metric::Count(non_empty))?;

        report.merge(aggregates)?;
        Ok(report)
    }
}

impl StatisticsGenerator for EnhancedStatistics {
    fn generate(&self, text: &str) -> StatisticsReport {
        if text.is_empty() {
            tracing::warn!("empty text received for statistics generation");
            return StatisticsReport::empty();
        }

        match self.compute(text) {
            Ok(report) => {
                tracing::info!(
                    chars = report.total_characters().unwrap_or(0),
                    words = report.count(TOTAL_WORDS).unwrap_or(0),
                    lines = report.count(TOTAL_LINES).unwrap_or(0),
                    "generated enhanced statistics"
                );
                report
            }
            Err(err) => degrade(err),
        }
    }
}

/// Round to two decimals, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(EnhancedStatistics::new().generate(""), StatisticsReport::empty());
    }

    #[test]
    fn test_aggregates_follow_alphabet_counts() {
        let report = EnhancedStatistics::new().generate("ab");
        assert_eq!(
            report.keys().collect::<Vec<_>>(),
            vec![
                "a",
                "b",
                "total_characters",
                ALPHABETIC_CHARS,
                NUMERIC_CHARS,
                WHITESPACE_CHARS,
                SPECIAL_CHARS,
                TOTAL_WORDS,
                AVG_WORD_LENGTH,
                TOTAL_LINES,
                NON_EMPTY_LINES,
            ]
        );
    }

    #[test]
    fn test_class_counts() {
        let report = EnhancedStatistics::new().generate("ab____1 2\n!");
        assert_eq!(report.count(ALPHABETIC_CHARS), Some(2));
        assert_eq!(report.count(NUMERIC_CHARS), Some(2));
        assert_eq!(report.count(WHITESPACE_CHARS), Some(2));
        assert_eq!(report.count(SPECIAL_CHARS), Some(5));
        assert_eq!(report.total_characters(), Some(11));
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        // 1 + 2 + 2 = 5 letters over 3 words
        let report = EnhancedStatistics::new().generate("a bb cc");
        assert_eq!(report.average(AVG_WORD_LENGTH), Some(1.67));
    }

    #[test]
    fn test_whitespace_only_has_no_words() {
        let report = EnhancedStatistics::new().generate("  \n ");
        assert_eq!(report.count(TOTAL_WORDS), Some(0));
        assert_eq!(report.average(AVG_WORD_LENGTH), Some(0.0));
        assert_eq!(report.count(TOTAL_LINES), Some(2));
        assert_eq!(report.count(NON_EMPTY_LINES), Some(0));
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let report = EnhancedStatistics::new().generate("x\ny\n");
        assert_eq!(report.count(TOTAL_LINES), Some(3));
        assert_eq!(report.count(NON_EMPTY_LINES), Some(2));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.0), 2.0);
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(9.0 / 8.0), 1.12);
        assert_eq!(round2(13.0 / 8.0), 1.62);
        assert_eq!(round2(11.0 / 8.0), 1.38);
    }
}
