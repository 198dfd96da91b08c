//! Feeding input files into a [`LineRouter`], one line at a time.
//!
//! Problems with one source never stop the others. A missing or unreadable
//! file is logged and skipped, and a line whose output cannot be written is
//! logged and the next line continues.

use crate::router::LineRouter;
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Totals for one feeding pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedSummary {
    /// Sources read to the end.
    pub files_processed: usize,
    /// Sources missing or failing partway through.
    pub files_failed: usize,
    /// Lines handed to the router, including ones that failed to write.
    pub lines: usize,
    /// Lines the router could not write.
    pub line_errors: usize,
}

/// Dispatch every line from `reader`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`; the terminator is stripped.
///
/// # Errors
/// Returns the first read error (including invalid UTF-8). Lines before it stay dispatched.
pub fn feed_reader<R: BufRead>(
    router: &mut LineRouter,
    mut reader: R,
    summary: &mut FeedSummary,
) -> std::io::Result<()> {
    let mut buf = String::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Ok(());
        }
        let chunk = buf.strip_suffix('\n').unwrap_or(buf.as_str());
        let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
        for line in chunk.split('\r') {
            summary.lines += 1;
            if let Err(err) = router.process_line(line) {
                summary.line_errors += 1;
                warn!("Error processing line: {err:#}");
            }
        }
    }
}

/// Open `path` and dispatch its lines.
///
/// # Errors
/// Fails if the file cannot be opened or read.
pub fn feed_file(
    router: &mut LineRouter,
    path: impl AsRef<Path>,
    summary: &mut FeedSummary,
) -> Result<()> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let before = summary.lines;
    feed_reader(router, BufReader::new(f), summary)
        .with_context(|| format!("read {}", path.display()))?;
    info!("{}: {} lines", path.display(), summary.lines - before);
    Ok(())
}

/// Dispatch every file in `paths`, in order.
pub fn feed_files<I, P>(router: &mut LineRouter, paths: I) -> FeedSummary
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut summary = FeedSummary::default();
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            warn!("File not found: {}", path.display());
            summary.files_failed += 1;
            continue;
        }
        match feed_file(router, path, &mut summary) {
            Ok(()) => summary.files_processed += 1,
            Err(err) => {
                warn!("Error reading file: {}: {err:#}", path.display());
                summary.files_failed += 1;
            }
        }
    }
    summary
}
