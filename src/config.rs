//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.konektado.toml` files.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Dataset source settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            verbose: false,
        }
    }
}

fn default_output() -> String {
    "dashboard.md".to_string()
}

/// Dataset source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Default dataset file path.
    #[serde(default = "default_input")]
    pub input: String,

    /// HTTP endpoint serving the dataset. Takes precedence over `input`.
    #[serde(default)]
    pub url: Option<String>,

    /// Request timeout in seconds for URL fetches.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            url: None,
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_input() -> String {
    "fixtures/complaints.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format: `"markdown"` or `"json"`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Maximum feed entries in the report.
    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,

    /// Whether to render the feed panel at all.
    #[serde(default = "default_true")]
    pub include_feed: bool,

    /// Text shown in place of an empty chart.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            feed_limit: default_feed_limit(),
            include_feed: true,
            placeholder: default_placeholder(),
        }
    }
}

impl ReportConfig {
    /// The feed limit the aggregation should use: zero when the feed
    /// panel is disabled.
    pub fn effective_feed_limit(&self) -> usize {
        if self.include_feed {
            self.feed_limit
        } else {
            0
        }
    }
}

fn default_feed_limit() -> usize {
    50
}

fn default_true() -> bool {
    true
}

fn default_placeholder() -> String {
    "No data available".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".konektado.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings. Every
    /// overridable flag is `Option`-typed, so an explicitly passed
    /// value always wins, even when it equals the built-in default.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        // Source settings
        if let Some(ref input) = args.input {
            self.source.input = input.display().to_string();
        }
        if args.url.is_some() {
            self.source.url = args.url.clone();
        }
        if let Some(timeout) = args.timeout {
            self.source.timeout_seconds = timeout;
        }

        // Report settings
        if let Some(format) = args.format {
            self.report.format = format;
        }
        if let Some(feed_limit) = args.feed_limit {
            self.report.feed_limit = feed_limit;
        }

        // General settings
        if let Some(ref output) = args.output {
            self.general.output = output.display().to_string();
        }
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
