use crate::config::{RunConfig, WriteMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ironsift")]
#[command(about = "Sort lines into integer, float and string files and report statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output directory for results
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Prefix for output file names
    #[arg(short, long, value_name = "PREFIX", default_value = "")]
    pub prefix: String,

    /// Append to existing files instead of overwriting them
    #[arg(short, long)]
    pub append: bool,

    /// Show short statistics (the default)
    #[arg(short = 's', long = "short-stat")]
    pub short_stat: bool,

    /// Show full statistics; takes precedence over --short-stat
    #[arg(short = 'f', long = "full-stat")]
    pub full_stat: bool,

    /// Input files, read in order
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(&self.output)
            .with_prefix(&self.prefix)
            .with_mode(WriteMode::from_append_flag(self.append))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::parse_from(["ironsift", "-a", "-f", "-o", "out", "-p", "x_", "in.txt"]);
        assert!(cli.append && cli.full_stat);
        assert_eq!(cli.files, [PathBuf::from("in.txt")]);
        let config = cli.run_config();
        assert_eq!(config.mode(), WriteMode::Append);
        assert_eq!(config.output_path(crate::Category::Integer), PathBuf::from("out/x_integers.txt"));
    }

    #[test]
    fn requires_input_files() {
        assert!(Cli::try_parse_from(["ironsift", "-f"]).is_err());
    }
}
