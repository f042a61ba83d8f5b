//! Spec store errors

use super::WheelwrightError;

/// Creates a spec not found error
pub fn not_found(name: impl Into<String>, store: impl Into<String>) -> WheelwrightError {
    WheelwrightError::SpecNotFound {
        name: name.into(),
        store: store.into(),
    }
}

/// Creates an ambiguous spec error from the conflicting file names
pub fn ambiguous(name: impl Into<String>, candidates: &[String]) -> WheelwrightError {
    WheelwrightError::AmbiguousSpec {
        name: name.into(),
        candidates: candidates.join(", "),
    }
}

/// Creates a spec parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> WheelwrightError {
    WheelwrightError::SpecParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid spec error
pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> WheelwrightError {
    WheelwrightError::SpecInvalid {
        path: path.into(),
        message: message.into(),
    }
}
