//! Aggregated results of a run

use super::{Artifact, PackageVersionSpec};

/// Artifacts produced for one runtime version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeArtifacts {
    pub runtime_version: String,
    pub artifacts: Vec<Artifact>,
}

/// Everything produced for one spec, runtimes in declared order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecOutcome {
    pub spec: PackageVersionSpec,
    pub runtimes: Vec<RuntimeArtifacts>,
}

/// A package identifier whose processing failed (only with `--keep-going`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub request: String,
    pub message: String,
}

/// Result of one invocation, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallResult {
    pub outcomes: Vec<SpecOutcome>,
    pub failures: Vec<RequestFailure>,
}

impl InstallResult {
    pub fn push(&mut self, spec: PackageVersionSpec, runtimes: Vec<RuntimeArtifacts>) {
        self.outcomes.push(SpecOutcome { spec, runtimes });
    }

    pub fn push_failure(&mut self, request: impl Into<String>, message: impl Into<String>) {
        self.failures.push(RequestFailure {
            request: request.into(),
            message: message.into(),
        });
    }

    /// Number of specs processed
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
