// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use log::{error, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use srtshift::app_config::{self, Config};
use srtshift::file_utils::DEFAULT_OUTPUT_SUFFIX;
use srtshift::{AppError, Controller};

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for srtshift
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// srtshift - easily delay or advance time in any .srt subtitle file
#[derive(Parser, Debug)]
#[command(name = "srtshift")]
#[command(version)]
#[command(about = "Easily delay or advance time in any .srt subtitle file")]
#[command(after_help = "EXAMPLES:
    Delay subtitle for 10 seconds
        srtshift -f subtitle.srt -t 10

    Delay subtitle for 1 minute and 10 seconds
        srtshift -f subtitle.srt -t 1:10

    Advance subtitle for 1 minute and 10.5 seconds
        srtshift -f subtitle.srt -t -1:10.5

The result is written next to the input, e.g. subtitle-resync.srt")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitle file
    #[arg(short = 'f', long = "file", value_name = "SUBTITLE_FILE")]
    file: Option<PathBuf>,

    /// Time shift with format [hh:]mm:ss[.000]; add a '-' prefix to advance the subtitle
    #[arg(short = 't', long = "time", value_name = "SHIFT", allow_hyphen_values = true)]
    time: Option<String>,

    /// Suffix inserted before the extension of the output file
    #[arg(long, default_value = DEFAULT_OUTPUT_SUFFIX)]
    suffix: String,

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

    // @returns: ANSI colour and prefix for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌ "),
            Level::Warn => ("1;33", "🚧 "),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "🔍 "),
            Level::Trace => ("1;35", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, prefix) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour, now, prefix, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // The logger accepts everything; the effective level is set via max_level
    if CustomLogger::init(LevelFilter::Trace).is_err() {
        eprintln!("Failed to initialise logger");
    }
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "srtshift", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    match run_resync(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_resync(options: CommandLineOptions) -> Result<(), AppError> {
    let log_level: app_config::LogLevel = options.log_level.map(Into::into).unwrap_or_default();
    log::set_max_level(log_level.into());

    let config = Config {
        input_file: options.file.unwrap_or_default(),
        shift: options.time.unwrap_or_default(),
        output_suffix: options.suffix,
        log_level,
    };

    // Missing file or shift: show the help text and do nothing else
    if config.missing_inputs() {
        let _ = CommandLineOptions::command().print_help();
        return Ok(());
    }

    let controller = Controller::with_config(config)?;
    controller.run()?;

    Ok(())
}
