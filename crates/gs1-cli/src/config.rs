//! CLI configuration.
//!
//! Settings resolve in this order, later sources winning:
//!
//! 1. Built-in defaults (text output, `<GS>` glyph).
//! 2. An optional YAML file passed with `--config`.
//! 3. Environment variables `GS1_OUTPUT_FORMAT` and `GS1_SEPARATOR_GLYPH`.
//! 4. Command-line flags (applied by `main`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default stand-in for the invisible group separator in terminal output.
pub const DEFAULT_SEPARATOR_GLYPH: &str = "<GS>";

/// How handlers print their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Line-oriented text for terminals.
    #[default]
    Text,
    /// Pretty-printed JSON for scripts.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "output format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Output format for every subcommand.
    pub format: OutputFormat,
    /// Text printed in place of each group separator, and accepted in its
    /// place on input to `decode`.
    pub separator_glyph: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            separator_glyph: DEFAULT_SEPARATOR_GLYPH.to_string(),
        }
    }
}

/// On-disk shape of the YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    format: Option<OutputFormat>,
    separator_glyph: Option<String>,
}

impl CliConfig {
    /// Resolve defaults, the optional file, and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Defaults overlaid with the keys present in a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::default();
        if let Some(format) = file.format {
            config.format = format;
        }
        if let Some(glyph) = file.separator_glyph {
            config.separator_glyph = validate_glyph("separator_glyph", glyph)?;
        }
        Ok(config)
    }

    /// Overlay environment variables read through `lookup`.
    ///
    /// Variables:
    /// - `GS1_OUTPUT_FORMAT` (`text` or `json`)
    /// - `GS1_SEPARATOR_GLYPH` (non-empty)
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("GS1_OUTPUT_FORMAT") {
            self.format = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "GS1_OUTPUT_FORMAT".to_string(),
                value,
            })?;
        }
        if let Some(value) = lookup("GS1_SEPARATOR_GLYPH") {
            self.separator_glyph = validate_glyph("GS1_SEPARATOR_GLYPH", value)?;
        }
        Ok(())
    }
}

fn validate_glyph(key: &str, glyph: String) -> Result<String, ConfigError> {
    if glyph.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: glyph,
        });
    }
    Ok(glyph)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
