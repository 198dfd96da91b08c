//! The line router: classification, accumulation and per-category sinks in one place.
//!
//! Each category owns a lane, which is its accumulator plus its sink. Lanes
//! are never shared, so a failure in one category's file cannot affect the
//! others.

use crate::category::Category;
use crate::classify::{Classified, classify};
use crate::config::{ConfigError, RunConfig};
use crate::sink::{OutputSink, SinkStatus};
use crate::stats::{DecimalStats, IntegerStats, Summary, TextStats};
use anyhow::Result;
use log::warn;
use std::path::Path;

struct Lane<S> {
    stats: S,
    sink: OutputSink,
}

impl<S: Default> Lane<S> {
    fn new(config: &RunConfig, category: Category) -> Self {
        Self {
            stats: S::default(),
            sink: OutputSink::new(config.output_path(category), config.mode()),
        }
    }
}

impl<S> Lane<S> {
    // Statistics only count lines accepted by the sink. A buffered line can
    // still be lost if the final flush in `close` fails.
    fn record(&mut self, line: &str, update: impl FnOnce(&mut S)) -> Result<()> {
        self.sink.write_line(line)?;
        update(&mut self.stats);
        Ok(())
    }
}

/// Routes lines to the integer, float and string lanes.
///
/// ```no_run
/// use ironsift::{LineRouter, RunConfig, WriteMode};
/// # fn main() -> anyhow::Result<()> {
/// let config = RunConfig::new("out").with_prefix("run_").with_mode(WriteMode::Append);
/// let mut router = LineRouter::new(&config)?;
/// for line in ["123", "45.67", "hello"] {
///     router.process_line(line)?;
/// }
/// for report in router.collect_statistics(true) {
///     println!("{report}");
/// }
/// router.close()?;
/// # Ok(())
/// # }
/// ```
pub struct LineRouter {
    integers: Lane<IntegerStats>,
    floats: Lane<DecimalStats>,
    strings: Lane<TextStats>,
}

impl LineRouter {
    /// Prepare the output directory and set up three unopened sinks.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the output directory cannot be used.
    pub fn new(config: &RunConfig) -> Result<Self, ConfigError> {
        config.prepare()?;
        Ok(Self {
            integers: Lane::new(config, Category::Integer),
            floats: Lane::new(config, Category::Float),
            strings: Lane::new(config, Category::String),
        })
    }

    /// Classify `line`, write it to its category's file and update that
    /// category's statistics.
    ///
    /// # Errors
    /// Fails if the category's file cannot be opened or written. The line is
    /// then not counted, and the router stays usable for the next line.
    pub fn process_line(&mut self, line: &str) -> Result<Category> {
        let classified = classify(line);
        let category = classified.category();
        match classified {
            Classified::Integer(value) => self.integers.record(line, |s| s.update(value)),
            Classified::Float(value) => self.floats.record(line, |s| s.update(value)),
            Classified::Text(text) => self.strings.record(line, |s| s.update(text)),
        }?;
        Ok(category)
    }

    /// Accumulators in dispatch order: integer, float, string.
    pub fn statistics(&self) -> [&dyn Summary; 3] {
        [&self.integers.stats, &self.floats.stats, &self.strings.stats]
    }

    /// Formatted reports in dispatch order.
    pub fn collect_statistics(&self, full: bool) -> Vec<String> {
        self.statistics()
            .iter()
            .map(|stats| stats.format(full))
            .collect()
    }

    pub fn integer_stats(&self) -> &IntegerStats {
        &self.integers.stats
    }

    pub fn float_stats(&self) -> &DecimalStats {
        &self.floats.stats
    }

    pub fn string_stats(&self) -> &TextStats {
        &self.strings.stats
    }

    pub fn sink_status(&self, category: Category) -> SinkStatus {
        self.sink(category).status()
    }

    pub fn output_path(&self, category: Category) -> &Path {
        self.sink(category).path()
    }

    /// Close every sink, even after one fails, and return the first failure.
    /// Calling it again is a no-op.
    ///
    /// # Errors
    /// Fails if any opened sink could not flush its buffered lines.
    pub fn close(&mut self) -> Result<()> {
        let mut first_error = None;
        for sink in [
            &mut self.integers.sink,
            &mut self.floats.sink,
            &mut self.strings.sink,
        ] {
            if let Err(err) = sink.close() {
                warn!("Failed to close {}: {err:#}", sink.path().display());
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn sink(&self, category: Category) -> &OutputSink {
        match category {
            Category::Integer => &self.integers.sink,
            Category::Float => &self.floats.sink,
            Category::String => &self.strings.sink,
        }
    }
}

impl Drop for LineRouter {
    fn drop(&mut self) {
        // Failures are already logged per sink.
        let _ = self.close();
    }
}
