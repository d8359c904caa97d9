//! # CLI Configuration
//!
//! Output settings come from three places, highest precedence first:
//!
//! 1. Command-line flags (`--format`, `--normalize`).
//! 2. The YAML file named by `--config`.
//! 3. Built-in defaults: text output, no normalization.
//!
//! ```yaml
//! format: json
//! normalize: true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, one block per input.
    #[default]
    Text,
    /// A pretty-printed JSON array of reports.
    Json,
}

/// Contents of a `--config` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub normalize: Option<bool>,
}

impl CliConfig {
    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing config file: {}", path.display()))
    }

    /// Parse YAML config text. An empty document is the default config.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Effective settings after merging flags, file and defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub normalize: bool,
}

impl Settings {
    /// Merge command-line values over the config file.
    ///
    /// `--normalize` is a switch, so only its presence overrides the file.
    pub fn resolve(format: Option<OutputFormat>, normalize: bool, file: &CliConfig) -> Self {
        Self {
            format: format.or(file.format).unwrap_or_default(),
            normalize: normalize || file.normalize.unwrap_or(false),
        }
    }

    /// Apply input normalization if enabled: drop ASCII whitespace and
    /// upper-case the rest.
    pub fn prepare(&self, input: &str) -> String {
        if !self.normalize {
            return input.to_string();
        }
        input
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}
