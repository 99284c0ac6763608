//! Command-line arguments and input selection

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tdlib-inspect")]
#[command(version)]
#[command(about = "Decode and summarize newline-delimited TDLib message payloads")]
pub struct Cli {
    /// File with one JSON message payload per line (default: input.path, then stdin)
    pub path: Option<PathBuf>,
}

/// Where payload lines are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl Cli {
    /// A path argument wins over `input.path`; with neither, read stdin
    #[must_use]
    pub fn input_source(&self, config: &Config) -> InputSource {
        self.path
            .clone()
            .or_else(|| config.input.path.as_ref().map(PathBuf::from))
            .map_or(InputSource::Stdin, InputSource::File)
    }
}
