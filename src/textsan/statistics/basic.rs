//! Per-character letter frequencies

use super::report::TOTAL_CHARACTERS;
use super::{degrade, Metric, StatisticsError, StatisticsGenerator, StatisticsReport};
use std::collections::BTreeMap;

/// Counts every alphabetic character.
///
/// The report lists one entry per distinct alphabetic character in ascending code
/// point order, then `total_characters` (the length of the input in characters).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlphabetCounter;

impl AlphabetCounter {
    pub(crate) fn compute(&self, text: &str) -> Result<StatisticsReport, StatisticsError> {
        let mut counts: BTreeMap<char, u64> = BTreeMap::new();
        let mut total: u64 = 0;

        for c in text.chars() {
            total += 1;
            if c.is_alphabetic() {
                *counts.entry(c).or_insert(0) += 1;
            }
        }

        let mut report = StatisticsReport::new();
        for (c, count) in counts {
            report.insert(c.to_string(), Metric::Count(count))?;
        }
        report.insert(TOTAL_CHARACTERS, Metric::Count(total))?;
        Ok(report)
    }
}

impl StatisticsGenerator for AlphabetCounter {
    fn generate(&self, text: &str) -> StatisticsReport {
        if text.is_empty() {
            tracing::warn!("empty text received for statistics generation");
            return StatisticsReport::empty();
        }

        match self.compute(text) {
            Ok(report) => {
                tracing::info!(
                    chars = report.total_characters().unwrap_or(0),
                    "generated statistics"
                );
                report
            }
            Err(err) => degrade(err),
        }
    }
}
