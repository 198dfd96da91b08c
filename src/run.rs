//! One complete run: prepare output, feed inputs, report, close.

use crate::cli::Cli;
use crate::input::feed_files;
use crate::router::LineRouter;
use anyhow::Result;
use log::{info, warn};
use std::io::Write;

/// Execute `cli` and write the statistics reports to `out`.
///
/// Missing input files and per-line write failures are logged and do not fail
/// the run. Sink close failures are logged after the reports are written.
///
/// # Errors
/// Fails if the output directory cannot be prepared or `out` cannot be written.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = cli.run_config();
    let mut router = LineRouter::new(&config)?;
    info!("writing output to {}", config.output_dir().display());
    let summary = feed_files(&mut router, &cli.files);
    info!(
        "processed {} of {} files, {} lines ({} failed)",
        summary.files_processed,
        cli.files.len(),
        summary.lines,
        summary.line_errors
    );

    for report in router.collect_statistics(cli.full_stat) {
        writeln!(out, "{report}")?;
    }
    out.flush()?;

    if let Err(err) = router.close() {
        warn!("Output may be incomplete: {err:#}");
    }
    Ok(())
}
