//! TDLib Inspect - decode and summarize logged TDLib message payloads

pub mod cli;
pub mod config;
pub mod inspect;

pub use cli::{Cli, InputSource};
pub use config::{Config, OutputFormat};
pub use inspect::{summarize, Inspector, Report};
