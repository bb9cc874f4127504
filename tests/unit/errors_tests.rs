/*!
 * Tests for error types and conversions
 */

use anyhow::Context;
use srtshift::errors::{AppError, ShiftError};

#[test]
fn test_shiftError_unrecognized_shouldDisplayExpression() {
    let error = ShiftError::Unrecognized("abc".to_string());
    assert_eq!(error.to_string(), "shift time (abc) not recognized");
}

#[test]
fn test_appError_fromShiftError_shouldWrapCorrectly() {
    let app_error: AppError = ShiftError::Unrecognized("1:2:3:4".to_string()).into();
    let display = format!("{}", app_error);
    assert!(display.contains("Shift error"));
    assert!(display.contains("1:2:3:4"));
}

#[test]
fn test_appError_fromAnyhowShiftError_shouldRecoverShiftVariant() {
    let anyhow_error: anyhow::Error = ShiftError::Unrecognized("x".to_string()).into();
    let app_error: AppError = anyhow_error.into();
    assert!(matches!(app_error, AppError::Shift(ShiftError::Unrecognized(ref s)) if s == "x"));
}

#[test]
fn test_appError_fromAnyhowUsage_shouldRecoverUsageVariant() {
    let anyhow_error: anyhow::Error = AppError::Usage("missing file".to_string()).into();
    let app_error: AppError = anyhow_error.into();
    assert!(matches!(app_error, AppError::Usage(_)));
}

#[test]
fn test_appError_fromAnyhowIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let anyhow_error = Err::<(), _>(io_error)
        .context("Error opening subtitle file: \"a.srt\"")
        .unwrap_err();
    let app_error: AppError = anyhow_error.into();
    let display = format!("{}", app_error);
    assert!(matches!(app_error, AppError::File(_)));
    assert!(display.contains("a.srt"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
    let app_error: AppError = io_error.into();
    assert_eq!(app_error.to_string(), "File error: Permission denied");
}

#[test]
fn test_appError_fromAnyhowError_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("Something went wrong").into();
    let display = format!("{}", app_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Something went wrong"));
}
