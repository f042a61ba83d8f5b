//! File system errors

use super::WheelwrightError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> WheelwrightError {
    WheelwrightError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
