//! netgraph configuration loading from `.netgraphrc.toml`.
//!
//! Configuration is optional. Missing files, unreadable files and parse
//! errors all fall back to defaults; the latter two are logged as warnings.
//!
//! # Example Configuration
//!
//! ```toml
//! [input]
//! file = "data/network.txt"
//!
//! [output]
//! format = "json"
//! color = false
//! ```

use serde::Deserialize;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".netgraphrc.toml";

/// Edge-list file used when neither `--file` nor `[input].file` is given.
pub const DEFAULT_INPUT_FILE: &str = "network.txt";

/// Root configuration structure loaded from `.netgraphrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct NetgraphConfig {
    /// Where the edge list comes from.
    #[serde(default)]
    pub input: InputSettings,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Input source configuration.
#[derive(Debug, Deserialize, Default)]
pub struct InputSettings {
    /// Default edge-list path, relative to the working directory.
    #[serde(default)]
    pub file: Option<String>,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table`, `json` or `csv`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output.
    ///
    /// Defaults to `true` when stdout is a TTY.
    #[serde(default)]
    pub color: Option<bool>,
}

impl NetgraphConfig {
    /// Load configuration from `.netgraphrc.toml` in the given directory.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Edge-list path from config, or the built-in default.
    pub fn input_file(&self) -> &str {
        self.input.file.as_deref().unwrap_or(DEFAULT_INPUT_FILE)
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Returns the configured color preference, or `None` to auto-detect.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}
