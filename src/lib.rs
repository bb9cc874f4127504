/*!
 * # srtshift - SRT subtitle resynchronisation
 *
 * A Rust library for delaying or advancing every caption of an SRT subtitle
 * file by a fixed amount.
 *
 * ## Features
 *
 * - Tolerant SRT parsing (byte-order mark, stray lines, comma or dot before milliseconds)
 * - Human-friendly shift expressions: `10`, `1:10`, `-1:10.5`, `+0:0:5.250`
 * - Clamping at 00:00:00.000 when advancing
 * - Output keeps the decimal separator convention of the input
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `clock`: Time-of-day arithmetic anchored to one calendar day
 * - `context`: Per-run state handed to every stage
 * - `subtitle_processor`: Caption parsing and rendering
 * - `shift`: Shift expression parsing and application
 * - `file_utils`: File system operations
 * - `app_config`: Configuration
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod clock;
pub mod context;
pub mod errors;
pub mod file_utils;
pub mod shift;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use context::RunContext;
pub use shift::{ShiftDuration, apply_shift};
pub use subtitle_processor::{Caption, CaptionSequence};
pub use errors::{AppError, ShiftError};
