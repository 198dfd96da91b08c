//! Per-run configuration: where output files go and how they are opened.

use crate::category::Category;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How a sink treats an existing output file when it first opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Discard previous content at open time.
    #[default]
    Truncate,
    /// Keep previous content and write after it.
    Append,
}

impl WriteMode {
    pub fn from_append_flag(append: bool) -> Self {
        if append {
            WriteMode::Append
        } else {
            WriteMode::Truncate
        }
    }

    pub(crate) fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.create(true);
        match self {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        options
    }
}

/// Fatal problems with the output location, raised before any line is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot create output directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output path {} exists and is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
}

/// Output directory, file name prefix and write mode for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    output_dir: PathBuf,
    prefix: String,
    mode: WriteMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

impl RunConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: String::new(),
            mode: WriteMode::default(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// `<output_dir>/<prefix><basename>` for `category`.
    pub fn output_path(&self, category: Category) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", self.prefix, category.basename()))
    }

    /// Create the output directory and any missing parents.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the path is occupied by a non-directory or
    /// cannot be created.
    pub fn prepare(&self) -> Result<(), ConfigError> {
        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.output_dir.clone(),
            });
        }
        fs::create_dir_all(&self.output_dir).map_err(|source| ConfigError::CreateDirectory {
            path: self.output_dir.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_applies_prefix() {
        let config = RunConfig::new("/tmp/out").with_prefix("run1_");
        assert_eq!(config.output_dir(), Path::new("/tmp/out"));
        assert_eq!(
            config.output_path(Category::Float),
            PathBuf::from("/tmp/out/run1_floats.txt")
        );
    }

    #[test]
    fn defaults_to_truncate_without_prefix() {
        let config = RunConfig::default();
        assert_eq!(config.mode(), WriteMode::Truncate);
        assert_eq!(config.prefix(), "");
        assert_eq!(WriteMode::from_append_flag(true), WriteMode::Append);
    }
}
