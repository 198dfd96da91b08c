//! # Ironsift
//!
//! Sorts lines of text into three categories (**integer**, **float** and
//! **string**), writes each line to a per-category file and keeps exact
//! streaming statistics over everything it has seen.
//!
//! ## Key Features
//!
//! - **Exact grammars** - whole-line recognition of integer and decimal literals
//! - **First match wins** - integer, then float, then string, in one fixed order
//! - **Unbounded arithmetic** - sums and comparisons over `BigInt` and `BigDecimal`
//! - **Lazy output files** - a category's file is created only when its first line arrives
//! - **Append or overwrite** - per-run choice, honored at open time
//!
//! ## Quick Start
//!
//! ```no_run
//! use ironsift::*;
//! # fn main() -> anyhow::Result<()> {
//! let config = RunConfig::new("out").with_prefix("sample_");
//! let mut router = LineRouter::new(&config)?;
//!
//! for line in ["123", "45.67", "hello", "3.1415"] {
//!     router.process_line(line)?;
//! }
//!
//! for report in router.collect_statistics(true) {
//!     println!("{report}");
//! }
//! router.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Categories
//!
//! | Category | Grammar (whole line) | Value |
//! |----------|----------------------|-------|
//! | Integer  | `[-+]?[0-9]+` | [`num_bigint::BigInt`] |
//! | Float    | `[-+]?[0-9]+\.[0-9]+(e[-+]?[0-9]+)?`, `[-+]?\.[0-9]+(e…)?`, `[-+]?[0-9]+e[-+]?[0-9]+` | [`bigdecimal::BigDecimal`] |
//! | String   | anything else, including the empty line | length in chars |
//!
//! Exponent markers may be `e` or `E`. The line text is written to its file
//! verbatim, so `+007` stays `+007`.
//!
//! ## Output Files
//!
//! `<prefix>integers.txt`, `<prefix>floats.txt` and `<prefix>strings.txt`
//! under the configured directory. A category that receives no lines leaves
//! its file untouched, even in [`WriteMode::Truncate`].
//!
//! ## Module Overview
//!
//! - [`category`] - the three categories and their file names
//! - [`grammar`] - recognizers and arbitrary-precision parsers
//! - [`classify`] - first-match classification
//! - [`stats`] - streaming accumulators and report formatting
//! - [`sink`] - lazily opened output files
//! - [`router`] - ties classification, statistics and sinks together
//! - [`config`] - output directory, prefix and write mode
//! - [`input`] - feeding files into a router
//! - [`cli`] / [`run`] - the command-line front end

pub mod category;
pub mod classify;
pub mod cli;
pub mod config;
pub mod grammar;
pub mod input;
pub mod router;
pub mod run;
pub mod sink;
pub mod stats;

pub use category::Category;
pub use classify::{Classified, classify};
pub use config::{ConfigError, RunConfig, WriteMode};
pub use input::{FeedSummary, feed_files};
pub use router::LineRouter;
pub use sink::{OutputSink, SinkStatus};
pub use stats::{DecimalStats, IntegerStats, NOT_AVAILABLE, Summary, TextStats};
