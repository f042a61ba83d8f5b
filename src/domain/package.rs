//! Package version specs
//!
//! A [`PackageVersionSpec`] is the unit of work of a run: one pip query built
//! for every listed runtime version.

use crate::hooks::HookConfig;

/// One declarative installation unit loaded from the spec store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVersionSpec {
    /// Name of the package on the source registry
    pub source_name: String,

    /// Pip version constraint (e.g. `==7.2.6`); empty means latest
    pub source_version_constraint: String,

    /// Exact runtime versions to build artifacts for, in processing order
    pub target_runtime_versions: Vec<String>,

    /// Mutation strategy applied to every produced artifact
    pub hook: HookConfig,
}

impl PackageVersionSpec {
    pub fn new(
        source_name: impl Into<String>,
        source_version_constraint: impl Into<String>,
        target_runtime_versions: Vec<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            source_version_constraint: source_version_constraint.into(),
            target_runtime_versions,
            hook: HookConfig::None,
        }
    }

    pub fn with_hook(mut self, hook: HookConfig) -> Self {
        self.hook = hook;
        self
    }

    /// Pip query passed to the installer: name and constraint concatenated verbatim
    pub fn query(&self) -> String {
        format!("{}{}", self.source_name, self.source_version_constraint)
    }
}
