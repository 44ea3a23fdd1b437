//! # textsan
//!
//! Reads text from a file, a literal string or the built-in sample, normalizes it
//! and reports character, word and line statistics.
//!
//! The processing core lives in [`textsan`]: four substitutable roles
//! ([`InputSource`](textsan::input::InputSource), [`Sanitizer`](textsan::sanitizing::Sanitizer),
//! [`StatisticsGenerator`](textsan::statistics::StatisticsGenerator),
//! [`OutputSink`](textsan::output::OutputSink)) wired together by
//! [`Pipeline`](textsan::pipeline::Pipeline).

pub mod textsan;
