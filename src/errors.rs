/*!
 * Error types for the srtshift application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when reading a shift expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShiftError {
    /// No accepted layout matched the expression
    #[error("shift time ({0}) not recognized")]
    Unrecognized(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the shift expression
    #[error("Shift error: {0}")]
    Shift(#[from] ShiftError),

    /// Required input missing on the command line
    #[error("Usage error: {0}")]
    Usage(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        let error = match error.downcast::<AppError>() {
            Ok(app) => return app,
            Err(other) => other,
        };
        let error = match error.downcast::<ShiftError>() {
            Ok(shift) => return Self::Shift(shift),
            Err(other) => other,
        };

        if error.root_cause().is::<std::io::Error>() {
            Self::File(format!("{:#}", error))
        } else {
            Self::Unknown(format!("{:#}", error))
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
