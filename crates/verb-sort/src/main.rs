//! `sort-verbs` command-line entry point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use verb_sort::output::{OutputStyle, render_check_summary, render_sort_summary};
use verb_sort::{OutputFormat, SortConfig, check_records, sort_records_with};

#[derive(Parser)]
#[command(
    name = "sort-verbs",
    about = "Sort a verb dictionary by kanaStart + kanaEnd",
    version,
    long_about = "Reads a JSON array of verb records, orders it by the concatenation of each record's kanaStart and kanaEnd fields (ties keep their input order) and writes it back pretty-printed."
)]
struct Cli {
    /// Verb file to sort [default: src/assets/verbs.json]
    input: Option<PathBuf>,

    /// Where to save the sorted file [default: overwrite the input]
    output: Option<PathBuf>,

    /// Only report whether the input is sorted; exit 1 if it is not
    #[arg(long, conflicts_with = "output")]
    check: bool,

    /// Spaces per indentation level in the output
    #[arg(long)]
    indent: Option<usize>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = SortConfig::load_or_default(cli.config.as_deref())?;
    let input = cli.input.unwrap_or_else(|| config.default_input.clone());
    let style = OutputStyle::new();

    if cli.check {
        let summary = check_records(&input)
            .with_context(|| format!("Failed to check {}", input.display()))?;
        println!(
            "{}",
            render_check_summary(&input, &summary, cli.format, &style)?
        );
        return Ok(if summary.is_sorted() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut options = config.sort_options();
    if let Some(indent) = cli.indent {
        options.indent = indent;
    }

    let summary = sort_records_with(&input, cli.output.as_deref(), &options)
        .with_context(|| format!("Failed to sort {}", input.display()))?;
    println!("{}", render_sort_summary(&summary, cli.format, &style)?);

    Ok(ExitCode::SUCCESS)
}
