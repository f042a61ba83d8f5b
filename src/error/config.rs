//! Configuration errors

use super::WheelwrightError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> WheelwrightError {
    WheelwrightError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> WheelwrightError {
    WheelwrightError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
