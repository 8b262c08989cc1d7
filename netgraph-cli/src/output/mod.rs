//! Output formatting for netgraph results
//!
//! Every command produces a `Serialize` record and renders it through the
//! [`Outputter`] trait in one of three formats: table (human-readable),
//! json (machine-readable) or csv.
//!
//! Colors and truncation are turned off automatically when stdout is not a TTY.

use clap::ValueEnum;
use serde::Serialize;
use std::io::IsTerminal;
use std::str::FromStr;

mod csv;
mod json;
mod table;

pub use self::csv::CsvOutput;
pub use self::json::JsonOutput;
pub use self::table::TableOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format (default)
    #[default]
    Table,
    /// JSON format for machine consumption
    Json,
    /// CSV format for spreadsheet/data processing
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// The output format to use
    pub format: OutputFormat,
    /// Disable colored output
    pub no_color: bool,
    /// Disable truncation of long values
    pub no_truncate: bool,
    /// Compact mode (less whitespace)
    pub compact: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            no_color: false,
            no_truncate: false,
            compact: false,
        }
    }

    /// Create an OutputConfig with automatic TTY detection and optional color override.
    ///
    /// When output is not a TTY (piped or redirected):
    /// - Colors are disabled (unless `color_override` is `Some(true)`)
    /// - Truncation is disabled
    pub fn auto_detect(format: OutputFormat, color_override: Option<bool>) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let use_color = color_override.unwrap_or(is_tty);
        Self {
            format,
            no_color: !use_color,
            no_truncate: !is_tty,
            compact: false,
        }
    }

    /// Get the effective terminal width
    pub fn effective_width(&self) -> usize {
        terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80)
    }

    /// Check if colors should be used
    pub fn use_colors(&self) -> bool {
        !self.no_color
    }

    /// Check if truncation should be applied
    pub fn should_truncate(&self) -> bool {
        !self.no_truncate
    }

    /// Builder: disable colors
    pub fn without_colors(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Builder: disable truncation
    pub fn without_truncation(mut self) -> Self {
        self.no_truncate = true;
        self
    }

    /// Builder: enable compact mode
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

/// Types that can be rendered in any supported format.
pub trait Outputter: Serialize + Sized {
    /// Render as table format
    fn to_table(&self, config: &OutputConfig) -> String;

    /// Render as JSON format
    fn to_json(&self, config: &OutputConfig) -> String {
        JsonOutput::format(self, config)
    }

    /// Render as CSV format
    fn to_csv(&self, config: &OutputConfig) -> String {
        CsvOutput::format(self, config)
    }

    /// Render using the format specified in config
    fn render(&self, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Table => self.to_table(config),
            OutputFormat::Json => self.to_json(config),
            OutputFormat::Csv => self.to_csv(config),
        }
    }
}

/// Result wrapper pairing data with its render configuration
pub struct Output<T> {
    data: T,
    config: OutputConfig,
}

impl<T: Outputter> Output<T> {
    pub fn new(data: T, config: OutputConfig) -> Self {
        Self { data, config }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        println!("{}", self.render_to_string());
        Ok(())
    }

    /// Get the rendered string without printing
    pub fn render_to_string(&self) -> String {
        self.data.render(&self.config)
    }
}

// ============================================================================
// Built-in message types
// ============================================================================

/// Simple success message
#[derive(Debug, Serialize)]
pub struct SuccessMessage {
    pub message: String,
}

impl SuccessMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Outputter for SuccessMessage {
    fn to_table(&self, config: &OutputConfig) -> String {
        use colored::Colorize;
        if config.use_colors() {
            format!("{} {}", "SUCCESS:".green().bold(), self.message)
        } else {
            format!("SUCCESS: {}", self.message)
        }
    }
}

// ============================================================================
// Utility functions
// ============================================================================

/// Bold section heading, plain when colors are off
pub fn heading(text: &str, config: &OutputConfig) -> String {
    use colored::Colorize;
    if config.use_colors() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_config_builder() {
        let config = OutputConfig::new(OutputFormat::Json)
            .without_colors()
            .without_truncation()
            .compact();

        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.use_colors());
        assert!(!config.should_truncate());
        assert!(config.compact);
    }

    #[test]
    fn test_success_message_plain() {
        let config = OutputConfig::new(OutputFormat::Table).without_colors();
        let rendered = SuccessMessage::new("done").render(&config);
        assert_eq!(rendered, "SUCCESS: done");
    }
}
