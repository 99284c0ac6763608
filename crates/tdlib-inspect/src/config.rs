use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use tdlib_logging::LogFormat;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[input]
# path = "messages.jsonl"  # Omit to read stdin; or set TDLIB_INSPECT_INPUT

[output]
format = "summary"  # summary or json

[decode]
fail_fast = false  # Stop at the first payload that does not decode

[logging]
level = "info"  # trace, debug, info, warn, error
format = "text"  # text or json
"#;

/// How decoded messages are written to stdout
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per message
    #[default]
    Summary,
    /// The re-encoded payload, one JSON object per line
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct InputConfig {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DecodeConfig {
    #[serde(default)]
    pub fail_fast: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub decode: DecodeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

impl Config {
    /// Get the global config path: ~/.tdlib-inspect/tdlib-inspect.toml
    fn global_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
        Ok(home.join(".tdlib-inspect").join("tdlib-inspect.toml"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> Result<PathBuf> {
        let config_path = Self::global_config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| anyhow!("Invalid config path {}", config_path.display()))?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            eprintln!("Created config directory: {}", config_dir.display());
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.tdlib-inspect/tdlib-inspect.toml (auto-created if missing)
    /// 2. Local override: ./tdlib-inspect.toml (optional)
    /// 3. Environment variables with the TDLIB_INSPECT__ prefix
    /// 4. Convenience variables TDLIB_INSPECT_INPUT and TDLIB_INSPECT_LOG
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let global_config_path = Self::ensure_global_config()?;

        let builder = config::Config::builder()
            .add_source(config::File::from(global_config_path))
            .add_source(config::File::with_name("tdlib-inspect").required(false))
            .add_source(config::Environment::with_prefix("TDLIB_INSPECT").separator("__"));

        let builder = Self::apply_overrides(builder, |key| env::var(key).ok())?;
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Parse a TOML document on top of the built-in defaults
    pub fn from_toml(toml: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn apply_overrides(
        mut builder: Builder,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Builder> {
        if let Some(path) = lookup("TDLIB_INSPECT_INPUT") {
            builder = builder.set_override("input.path", path)?;
        }

        if let Some(level) = lookup("TDLIB_INSPECT_LOG") {
            builder = builder.set_override("logging.level", level)?;
        }

        Ok(builder)
    }
}
