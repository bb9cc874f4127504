use log::LevelFilter;
use std::default::Default;
use std::path::PathBuf;

use crate::errors::AppError;
use crate::file_utils::DEFAULT_OUTPUT_SUFFIX;

/// Application configuration module
/// Everything comes from the command line; nothing is read from disk or the
/// environment.
/// Represents the application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Subtitle file to resync
    pub input_file: PathBuf,

    /// Shift expression, e.g. `10`, `1:10` or `-1:10.5`
    pub shift: String,

    /// Suffix inserted before the output file's extension
    pub output_suffix: String,

    /// Log level
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Config {
    pub fn new(input_file: impl Into<PathBuf>, shift: impl Into<String>) -> Self {
        Config {
            input_file: input_file.into(),
            shift: shift.into(),
            ..Config::default()
        }
    }

    /// True when the subtitle file or the shift expression was not given
    pub fn missing_inputs(&self) -> bool {
        self.input_file.as_os_str().is_empty() || self.shift.trim().is_empty()
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.input_file.as_os_str().is_empty() {
            return Err(AppError::Usage("A subtitle file is required".to_string()));
        }

        if self.shift.trim().is_empty() {
            return Err(AppError::Usage("A shift time is required".to_string()));
        }

        if self.output_suffix.is_empty() {
            return Err(AppError::Usage("Output suffix must not be empty, the input file would be overwritten".to_string()));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_file: PathBuf::new(),
            shift: String::new(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            log_level: LogLevel::default(),
        }
    }
}
