//! Install dispatcher
//!
//! Builds one [`PackageVersionSpec`] for every runtime version it targets,
//! strictly one after the other: in release mode each call writes to the
//! shared registry. All runtimes share one scratch directory which is removed
//! on every exit path.

use std::path::PathBuf;

use tracing::info;

use crate::domain::{
    Artifact, ArtifactSummary, DistributionMetadata, PackageVersionSpec, RuntimeArtifacts,
};
use crate::error::Result;
use crate::hooks::{self, PatchCallback};
use crate::installer::{Installer, InstallerInvocation};
use crate::runtime::{RuntimeRegistry, RuntimeResolver};
use crate::temp::ScratchDir;

/// Dispatches specs to the external installer
pub struct InstallDispatcher<'a> {
    installer: &'a dyn Installer,
    resolver: RuntimeResolver<'a>,
    scratch_base: Option<PathBuf>,
}

impl<'a> InstallDispatcher<'a> {
    pub fn new(installer: &'a dyn Installer, registry: &'a dyn RuntimeRegistry) -> Self {
        Self {
            installer,
            resolver: RuntimeResolver::new(registry),
            scratch_base: None,
        }
    }

    /// Create scratch directories under `base` instead of the temp dir
    pub fn with_scratch_base(mut self, base: Option<PathBuf>) -> Self {
        self.scratch_base = base;
        self
    }

    /// Build `spec` for each of its runtime versions, in declared order.
    ///
    /// The first failure stops the dispatch; the scratch directory is removed
    /// before the error is returned.
    pub fn dispatch(
        &self,
        spec: &PackageVersionSpec,
        release: bool,
    ) -> Result<Vec<RuntimeArtifacts>> {
        let scratch = ScratchDir::create(&spec.source_name, self.scratch_base.as_deref())?;

        let hook = hooks::build(&spec.hook);
        let callback = PatchCallback::new(hook.as_deref());
        let companion_tool = self.installer.companion_tool()?;
        let query = spec.query();

        let mut installed = Vec::with_capacity(spec.target_runtime_versions.len());

        for runtime_version in &spec.target_runtime_versions {
            let runtime_executable = self.resolver.resolve(runtime_version)?;
            let prefix = format!("{query}:{runtime_version}");

            let invocation = InstallerInvocation {
                query: &query,
                runtime_version,
                runtime_executable: &runtime_executable,
                companion_tool: &companion_tool,
                work_area: scratch.path(),
                release,
            };

            info!("[{}] calling installer ...", prefix);
            let mut on_artifact = |artifact: &mut Artifact, metadata: &DistributionMetadata| {
                callback.invoke(artifact, metadata)
            };
            let artifacts = self.installer.install(&invocation, &mut on_artifact)?;

            let summary = ArtifactSummary::of(&artifacts);
            info!(
                "[{}] installed {} packages, skipped {}, patched {}.",
                prefix, summary.installed, summary.skipped, summary.patched
            );

            installed.push(RuntimeArtifacts {
                runtime_version: runtime_version.clone(),
                artifacts,
            });
        }

        Ok(installed)
    }
}
