//! Ordered statistics report

use super::StatisticsError;
use std::fmt;

/// Key of the aggregate character count every report carries.
pub const TOTAL_CHARACTERS: &str = "total_characters";

/// Key holding the failure description in a degraded report.
pub const ERROR: &str = "error";

/// A single metric value.
#[derive(Debug, Clone, PartialEq)]
pub enum Metric {
    Count(u64),
    Average(f64),
    Error(String),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Count(n) => write!(f, "{}", n),
            // Debug formatting keeps the decimal point on whole numbers ("2.0")
            Metric::Average(avg) => write!(f, "{:?}", avg),
            Metric::Error(msg) => write!(f, "{}", msg),
        }
    }
}

/// Ordered mapping from metric name to value.
///
/// Entries keep their insertion order, which generators use to lay out per-character
/// counts sorted by character followed by the aggregate metrics. Keys are unique:
/// [`StatisticsReport::insert`] refuses to overwrite an existing entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsReport {
    entries: Vec<(String, Metric)>,
}

impl StatisticsReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The report for empty input: only `total_characters = 0`.
    pub fn empty() -> Self {
        Self {
            entries: vec![(TOTAL_CHARACTERS.to_string(), Metric::Count(0))],
        }
    }

    /// The report produced when statistics could not be computed.
    pub fn degraded(description: impl Into<String>) -> Self {
        Self {
            entries: vec![
                (TOTAL_CHARACTERS.to_string(), Metric::Count(0)),
                (ERROR.to_string(), Metric::Error(description.into())),
            ],
        }
    }

    /// Append an entry. Fails if the key is already present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        metric: Metric,
    ) -> Result<(), StatisticsError> {
        let key = key.into();
        if self.contains(&key) {
            return Err(StatisticsError::KeyCollision(key));
        }
        self.entries.push((key, metric));
        Ok(())
    }

    /// Append every entry of `other`, keeping its order.
    pub fn merge(&mut self, other: StatisticsReport) -> Result<(), StatisticsError> {
        for (key, metric) in other.entries {
            self.insert(key, metric)?;
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Metric> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, m)| m)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The value of a count metric, if `key` holds one.
    pub fn count(&self, key: &str) -> Option<u64> {
        match self.get(key) {
            Some(Metric::Count(n)) => Some(*n),
            _ => None,
        }
    }

    /// The value of an average metric, if `key` holds one.
    pub fn average(&self, key: &str) -> Option<f64> {
        match self.get(key) {
            Some(Metric::Average(avg)) => Some(*avg),
            _ => None,
        }
    }

    pub fn total_characters(&self) -> Option<u64> {
        self.count(TOTAL_CHARACTERS)
    }

    /// The failure description of a degraded report.
    pub fn error(&self) -> Option<&str> {
        match self.get(ERROR) {
            Some(Metric::Error(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Metric)> {
        self.entries.iter().map(|(k, m)| (k.as_str(), m))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = StatisticsReport::empty();
        assert_eq!(report.len(), 1);
        assert_eq!(report.total_characters(), Some(0));
    }

    #[test]
    fn test_degraded_report() {
        let report = StatisticsReport::degraded("boom");
        assert_eq!(report.total_characters(), Some(0));
        assert_eq!(report.error(), Some("boom"));
        assert_eq!(report.keys().collect::<Vec<_>>(), vec!["total_characters", "error"]);
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut report = StatisticsReport::new();
        report.insert("z", Metric::Count(1)).unwrap();
        report.insert("a", Metric::Count(2)).unwrap();
        assert_eq!(report.keys().collect::<Vec<_>>(), vec!["z", "a"]);
    }

    #[test]
    fn test_insert_rejects_collision() {
        let mut report = StatisticsReport::new();
        report.insert("a", Metric::Count(1)).unwrap();
        let err = report.insert("a", Metric::Count(2)).unwrap_err();
        assert_eq!(err, StatisticsError::KeyCollision("a".to_string()));
        assert_eq!(report.count("a"), Some(1));
    }

    #[test]
    fn test_merge_detects_collision() {
        let mut base = StatisticsReport::empty();
        let err = base.merge(StatisticsReport::empty()).unwrap_err();
        assert_eq!(err, StatisticsError::KeyCollision(TOTAL_CHARACTERS.to_string()));
    }

    #[test]
    fn test_typed_accessors() {
        let mut report = StatisticsReport::new();
        report.insert("words", Metric::Count(3)).unwrap();
        report.insert("avg", Metric::Average(2.5)).unwrap();

        assert_eq!(report.count("words"), Some(3));
        assert_eq!(report.count("avg"), None);
        assert_eq!(report.average("avg"), Some(2.5));
        assert_eq!(report.average("missing"), None);
    }

    #[test]
    fn test_metric_display() {
        assert_eq!(Metric::Count(7).to_string(), "7");
        assert_eq!(Metric::Average(2.0).to_string(), "2.0");
        assert_eq!(Metric::Average(4.33).to_string(), "4.33");
        assert_eq!(Metric::Error("bad".into()).to_string(), "bad");
    }
}
