//! External installer seam
//!
//! The installer downloads a pip query with its dependency graph, stages one
//! artifact per distribution, lets the caller mutate each staged artifact and
//! then finalizes them (build locally, or release to the shared registry).
//!
//! [`Installer`] is the contract the dispatcher depends on;
//! [`CommandInstaller`] drives an installer program over a JSON protocol.

pub mod command;
pub mod protocol;

pub use command::CommandInstaller;

use std::path::{Path, PathBuf};

use crate::domain::{Artifact, DistributionMetadata};
use crate::error::Result;

/// Callback run once per staged artifact, before it is finalized
pub type ArtifactCallback<'a> =
    dyn FnMut(&mut Artifact, &DistributionMetadata) -> Result<()> + 'a;

/// Everything the installer needs for one (spec, runtime) pair
#[derive(Debug, Clone, Copy)]
pub struct InstallerInvocation<'a> {
    /// Pip query (`name` + version constraint)
    pub query: &'a str,
    /// Runtime version the artifacts are built for
    pub runtime_version: &'a str,
    /// Interpreter of that runtime
    pub runtime_executable: &'a Path,
    /// Pip executable bundled with the installer
    pub companion_tool: &'a Path,
    /// Scratch directory shared by every runtime of the spec
    pub work_area: &'a Path,
    /// Publish to the shared registry instead of building locally
    pub release: bool,
}

/// External installer building runtime-scoped artifacts from pip distributions
pub trait Installer {
    /// Path of the pip executable bundled with the installer
    fn companion_tool(&self) -> Result<PathBuf>;

    /// Stage, mutate (through `on_artifact`) and finalize every artifact of a query
    fn install(
        &self,
        invocation: &InstallerInvocation<'_>,
        on_artifact: &mut ArtifactCallback<'_>,
    ) -> Result<Vec<Artifact>>;
}
