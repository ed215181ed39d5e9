// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::app_config::Config;
use crate::app_controller::Controller;
use crate::errors::AppError;

mod app_config;
mod app_controller;
mod batch;
mod errors;
mod file_utils;
mod transcript;
mod ttml;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// ttscribe - TTML transcript extraction
///
/// Converts TTML timed-text documents into plain-text transcripts,
/// optionally annotated with timestamps.
#[derive(Parser, Debug)]
#[command(name = "ttscribe")]
#[command(version = "1.0.0")]
#[command(about = "TTML to plain-text transcript converter")]
#[command(long_about = "ttscribe converts TTML caption documents into plain-text transcripts.

EXAMPLES:
    ttscribe episode.ttml episode.txt               # Convert a single file
    ttscribe episode.ttml episode.txt --timestamps  # Prefix lines with [HH:MM:SS]
    ttscribe                                        # Convert the whole TTML cache
    ttscribe --timestamps                           # Batch mode with timestamps

MODES:
    With INPUT and OUTPUT, a single document is converted. With neither,
    the Apple Podcasts TTML cache under the home directory is scanned
    recursively and one transcript per document is written to
    ./transcripts/, deduplicating names derived from each document's
    PodcastContent path segment.

CONFIGURATION:
    An optional JSON config file (conf.json by default) can override the
    batch root directory, the batch output directory and the log level.")]
struct CommandLineOptions {
    /// Input TTML file (single-file mode, requires OUTPUT)
    #[arg(value_name = "INPUT", requires = "output")]
    input: Option<PathBuf>,

    /// Output transcript file (single-file mode)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Prefix each transcript line with its [HH:MM:SS] begin time
    #[arg(short, long)]
    timestamps: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Load configuration if a config file is present, otherwise fall
    // back to defaults
    let mut config = if Path::new(&cli.config_path).exists() {
        Config::from_file(&cli.config_path)?
    } else {
        Config::default()
    };

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    } else {
        // Log level comes from the config when not set on the command line
        log::set_max_level(config.log_level.to_level_filter());
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    match (cli.input, cli.output) {
        (Some(input), Some(output)) => controller.run_single(&input, &output, cli.timestamps),
        (None, None) => controller.run_batch(cli.timestamps),
        // Unreachable through clap's `requires`, kept for exhaustiveness
        _ => Err(AppError::InvalidUsage(
            "an input file requires an output file".to_string(),
        )
        .into()),
    }
}
