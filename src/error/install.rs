//! Installer and mutation hook errors

use super::WheelwrightError;

/// Creates an installer failed error
pub fn installer_failed(
    query: impl Into<String>,
    runtime: impl Into<String>,
    reason: impl Into<String>,
) -> WheelwrightError {
    WheelwrightError::InstallerFailed {
        query: query.into(),
        runtime: runtime.into(),
        reason: reason.into(),
    }
}

/// Creates a mutation hook failed error
pub fn hook_failed(
    hook: impl Into<String>,
    artifact: impl Into<String>,
    reason: impl Into<String>,
) -> WheelwrightError {
    WheelwrightError::MutationHookFailed {
        hook: hook.into(),
        artifact: artifact.into(),
        reason: reason.into(),
    }
}

/// Creates a scratch directory failed error
pub fn scratch_dir_failed(name: impl Into<String>, reason: impl Into<String>) -> WheelwrightError {
    WheelwrightError::ScratchDirFailed {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a requests failed error (`--keep-going` runs with failures)
pub fn requests_failed(count: usize, total: usize) -> WheelwrightError {
    WheelwrightError::RequestsFailed { count, total }
}
