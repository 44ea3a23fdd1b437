//! Pipeline orchestration
//!
//! A [`Pipeline`] owns one component per role and runs the four stages strictly in
//! order: Read, Sanitize, Statistics, Write. There is no branching or retry between
//! stages.
//!
//! Components handle their own soft failures (they log and return a default), so
//! the pipeline cannot tell a degraded stage from a successful one. A panic escaping
//! a stage is a hard failure: the run stops there and reports
//! [`PipelineError::StageFailed`].
//!
//! ```rust,ignore
//! use textsan::textsan::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::from_settings(&settings);
//! pipeline.run()?;
//! ```

use crate::textsan::config::Settings;
use crate::textsan::input::{InputSource, Source};
use crate::textsan::output::{OutputSink, Sink};
use crate::textsan::sanitizing::{BasicSanitizer, Sanitizer};
use crate::textsan::statistics::StatisticsGenerator;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// The ordered stages of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Sanitize,
    Statistics,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read => "read",
            Stage::Sanitize => "sanitize",
            Stage::Statistics => "statistics",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("{stage} stage failed: {message}")]
    StageFailed { stage: Stage, message: String },
}

/// Wires one input source, sanitizer, statistics generator and output sink.
pub struct Pipeline {
    source: Box<dyn InputSource>,
    sanitizer: Box<dyn Sanitizer>,
    statistics: Box<dyn StatisticsGenerator>,
    sink: Box<dyn OutputSink>,
}

impl Pipeline {
    pub fn new(
        source: Box<dyn InputSource>,
        sanitizer: Box<dyn Sanitizer>,
        statistics: Box<dyn StatisticsGenerator>,
        sink: Box<dyn OutputSink>,
    ) -> Self {
        Self {
            source,
            sanitizer,
            statistics,
            sink,
        }
    }

    /// Build the standard pipeline for resolved settings.
    pub fn from_settings(settings: &Settings) -> Self {
        tracing::debug!(
            source = %settings.source,
            target = ?settings.target,
            statistics = %settings.statistics,
            "building pipeline"
        );
        Self::new(
            Box::new(Source::classify(&settings.source)),
            Box::new(BasicSanitizer),
            settings.statistics.generator(),
            Box::new(Sink::for_target(settings.target.as_deref())),
        )
    }

    /// Run every stage once, in order.
    pub fn run(&self) -> Result<(), PipelineError> {
        tracing::info!("reading input text");
        let raw = run_stage(Stage::Read, || self.source.read())?;

        tracing::info!("sanitizing text");
        let sanitized = run_stage(Stage::Sanitize, || self.sanitizer.sanitize(&raw))?;

        tracing::info!("generating statistics");
        let report = run_stage(Stage::Statistics, || self.statistics.generate(&sanitized))?;

        tracing::info!("writing output");
        run_stage(Stage::Write, || self.sink.write(&sanitized, &report))?;

        Ok(())
    }
}

fn run_stage<T>(stage: Stage, f: impl FnOnce() -> T) -> Result<T, PipelineError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| PipelineError::StageFailed {
        stage,
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run the pipeline for resolved settings and report whether it succeeded.
///
/// This is the entry point the command-line front end calls; `false` maps to a
/// non-zero exit status.
pub fn process(settings: &Settings) -> bool {
    match Pipeline::from_settings(settings).run() {
        Ok(()) => {
            tracing::info!("text processing completed successfully");
            true
        }
        Err(err) => {
            tracing::error!(error = %err, "error during text processing");
            eprintln!("An error occurred: {}", err);
            false
        }
    }
}
