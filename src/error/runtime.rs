//! Runtime registry errors

use super::WheelwrightError;

/// Creates a runtime not found error
pub fn not_found(version: impl Into<String>) -> WheelwrightError {
    WheelwrightError::RuntimeNotFound {
        version: version.into(),
    }
}

/// Creates a runtime executable not found error
pub fn executable_not_found(version: impl Into<String>, path: impl Into<String>) -> WheelwrightError {
    WheelwrightError::RuntimeExecutableNotFound {
        version: version.into(),
        path: path.into(),
    }
}
