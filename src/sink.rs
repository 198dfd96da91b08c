//! Lazily opened, exclusively owned output file for one category.
//!
//! A sink moves through `Unopened → Open → Closed` and never back. The file is
//! only touched by the first [`OutputSink::write_line`], so a category that never
//! receives a line leaves its path alone in both write modes: no file is
//! created and an existing one is not truncated.

use crate::config::WriteMode;
use anyhow::{Context, Result, bail};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Observable lifecycle state of a sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkStatus {
    Unopened,
    Open,
    Closed,
}

enum SinkState {
    Unopened,
    Open(BufWriter<File>),
    Closed,
}

/// Output stream bound to one path, opened on first write.
pub struct OutputSink {
    path: PathBuf,
    mode: WriteMode,
    state: SinkState,
}

impl OutputSink {
    pub fn new(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            path: path.into(),
            mode,
            state: SinkState::Unopened,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn status(&self) -> SinkStatus {
        match self.state {
            SinkState::Unopened => SinkStatus::Unopened,
            SinkState::Open(_) => SinkStatus::Open,
            SinkState::Closed => SinkStatus::Closed,
        }
    }

    /// Write `line` verbatim followed by `\n`, opening the file first if needed.
    ///
    /// # Errors
    /// Fails if the file cannot be opened or written, or the sink is closed.
    /// A failed open leaves the sink unopened, so a later line retries.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let writer = self.writer()?;
        writeln!(writer, "{line}").with_context(|| format!("write {}", self.path.display()))
    }

    /// Flush and release the file. Closing an unopened or closed sink only
    /// marks it closed; the path is never touched.
    ///
    /// # Errors
    /// Fails if buffered lines cannot be flushed. The sink is closed either way.
    pub fn close(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, SinkState::Closed) {
            SinkState::Open(mut writer) => {
                debug!("closing {}", self.path.display());
                writer
                    .flush()
                    .with_context(|| format!("flush {}", self.path.display()))
            }
            SinkState::Unopened | SinkState::Closed => Ok(()),
        }
    }

    // The only Unopened -> Open transition.
    fn writer(&mut self) -> Result<&mut BufWriter<File>> {
        if matches!(self.state, SinkState::Unopened) {
            let file = self
                .mode
                .open_options()
                .open(&self.path)
                .with_context(|| format!("open {}", self.path.display()))?;
            debug!("opened {} ({:?})", self.path.display(), self.mode);
            self.state = SinkState::Open(BufWriter::new(file));
        }
        match &mut self.state {
            SinkState::Open(writer) => Ok(writer),
            SinkState::Unopened | SinkState::Closed => {
                bail!("write to closed sink {}", self.path.display())
            }
        }
    }
}

impl std::fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSink")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("status", &self.status())
            .finish()
    }
}
