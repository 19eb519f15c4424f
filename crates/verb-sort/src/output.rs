//! Output formatting for the CLI
//!
//! Reports are built as strings so that the exact wording can be tested;
//! `main` decides where they are printed.

use crate::sorter::{CheckSummary, SortSummary};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;

/// Output format options for the CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Style configuration for output formatting
pub struct OutputStyle {
    /// Whether to use colors in output
    pub use_color: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_color: std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
        }
    }
}

impl OutputStyle {
    /// Create a new output style
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable colors in output
    #[must_use]
    pub fn no_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

/// Format a success message
pub fn format_success(text: &str, style: &OutputStyle) -> String {
    if style.use_color {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

/// Format a warning message
pub fn format_warning(text: &str, style: &OutputStyle) -> String {
    if style.use_color {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

/// Format a file path
pub fn format_path(path: &Path, style: &OutputStyle) -> String {
    let path = path.display().to_string();
    if style.use_color {
        path.bright_magenta().to_string()
    } else {
        path
    }
}

/// Completion report for a sort run
pub fn render_sort_summary(
    summary: &SortSummary,
    format: OutputFormat,
    style: &OutputStyle,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(summary),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(summary),
        OutputFormat::Text => Ok(format!(
            "{} {}",
            format_success(&format!("Sorted {} verbs and saved to", summary.count), style),
            format_path(&summary.destination, style)
        )),
    }
}

/// Report for `--check`
pub fn render_check_summary(
    source: &Path,
    summary: &CheckSummary,
    format: OutputFormat,
    style: &OutputStyle,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(summary),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(summary),
        OutputFormat::Text => Ok(match summary.first_unsorted {
            None => format!(
                "{} {}",
                format_path(source, style),
                format_success(&format!("is sorted ({} verbs)", summary.count), style)
            ),
            Some(index) => format!(
                "{} {}",
                format_path(source, style),
                format_warning(
                    &format!("is not sorted: verb {index} of {} is out of order", summary.count),
                    style
                )
            ),
        }),
    }
}
