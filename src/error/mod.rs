//! Error types and handling for Wheelwright
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped in sub-modules by error domain:
//! - [`spec`]: Spec store errors
//! - [`runtime`]: Runtime registry errors
//! - [`install`]: Installer and mutation hook errors
//! - [`config`]: Tool configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod install;
pub mod runtime;
pub mod spec;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Wheelwright operations
#[derive(Error, Diagnostic, Debug)]
pub enum WheelwrightError {
    // Spec store errors
    #[error("Package '{name}' not found in spec store {store}")]
    #[diagnostic(
        code(wheelwright::spec::not_found),
        help("Add a '{name}.yaml' file to the spec store or run with --list to see known packages")
    )]
    SpecNotFound { name: String, store: String },

    #[error("Package '{name}' is defined more than once: {candidates}")]
    #[diagnostic(
        code(wheelwright::spec::ambiguous),
        help("Keep a single spec file per package name")
    )]
    AmbiguousSpec { name: String, candidates: String },

    #[error("Failed to parse package spec {path}: {reason}")]
    #[diagnostic(code(wheelwright::spec::parse_failed))]
    SpecParseFailed { path: String, reason: String },

    #[error("Invalid package spec {path}: {message}")]
    #[diagnostic(code(wheelwright::spec::invalid))]
    SpecInvalid { path: String, message: String },

    // Runtime errors
    #[error("No runtime package found for version '{version}'")]
    #[diagnostic(
        code(wheelwright::runtime::not_found),
        help("Check the runtime search paths (--runtime-path) contain this version")
    )]
    RuntimeNotFound { version: String },

    #[error("Runtime '{version}' at {path} has no executable")]
    #[diagnostic(code(wheelwright::runtime::executable_not_found))]
    RuntimeExecutableNotFound { version: String, path: String },

    // Installer errors
    #[error("Installer failed for '{query}' on runtime {runtime}: {reason}")]
    #[diagnostic(code(wheelwright::install::installer_failed))]
    InstallerFailed {
        query: String,
        runtime: String,
        reason: String,
    },

    #[error("Mutation hook '{hook}' failed on artifact '{artifact}': {reason}")]
    #[diagnostic(code(wheelwright::install::hook_failed))]
    MutationHookFailed {
        hook: String,
        artifact: String,
        reason: String,
    },

    #[error("Failed to create scratch directory for '{name}': {reason}")]
    #[diagnostic(code(wheelwright::install::scratch_dir_failed))]
    ScratchDirFailed { name: String, reason: String },

    #[error("{count} of {total} package ids failed")]
    #[diagnostic(
        code(wheelwright::install::requests_failed),
        help("See the failed requests at the end of the report")
    )]
    RequestsFailed { count: usize, total: usize },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(wheelwright::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(wheelwright::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(wheelwright::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(wheelwright::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for WheelwrightError {
    fn from(err: std::io::Error) -> Self {
        WheelwrightError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for WheelwrightError {
    fn from(err: serde_yaml::Error) -> Self {
        WheelwrightError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, WheelwrightError>;
