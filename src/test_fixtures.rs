//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Provides temp directories, spec stores and runtime repositories on disk,
//! plus in-memory stand-ins for the runtime registry and the installer.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_spec_store, FakeInstaller, StaticRuntimeRegistry};
//!
//! #[test]
//! fn my_test() {
//!     let (_temp, store) = create_spec_store(&[("alpha.yaml", "name: alpha\nversions: []\n")]);
//!     let registry = StaticRuntimeRegistry::new().with_runtime("3.10.11", "/opt/python");
//!     let installer = FakeInstaller::new();
//! }
//! ```

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::SpecStore;
use crate::domain::{Artifact, DistributionMetadata};
use crate::error::{Result, install};
use crate::installer::{ArtifactCallback, Installer, InstallerInvocation};
use crate::runtime::{RuntimePackage, RuntimeRegistry};

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` to ensure temp dirs are never
/// created under the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a spec store holding the given `(file name, content)` documents.
///
/// # Panics
///
/// Panics if any file cannot be written.
#[must_use]
pub fn create_spec_store(files: &[(&str, &str)]) -> (TempDir, SpecStore) {
    let temp = create_temp_dir();
    for (name, content) in files {
        std::fs::write(temp.path().join(name), content).expect("Failed to write spec file");
    }
    let store = SpecStore::new(temp.path());
    (temp, store)
}

/// Create `<base>/<family>/<version>/bin/python3` and return its path.
///
/// # Panics
///
/// Panics if the runtime directory cannot be created.
pub fn create_runtime(base: &Path, family: &str, version: &str) -> PathBuf {
    let bin = base.join(family).join(version).join("bin");
    std::fs::create_dir_all(&bin).expect("Failed to create runtime directory");
    let exe = bin.join("python3");
    std::fs::write(&exe, "#!/bin/sh\n").expect("Failed to write interpreter");
    exe
}

/// In-memory runtime registry matching versions exactly, in insertion order
#[derive(Debug, Default)]
pub struct StaticRuntimeRegistry {
    packages: Vec<RuntimePackage>,
}

impl StaticRuntimeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_runtime(self, version: &str, executable: impl Into<PathBuf>) -> Self {
        let executable = executable.into();
        let root = executable
            .parent()
            .map_or_else(|| executable.clone(), Path::to_path_buf);
        self.with_package(RuntimePackage {
            family: "python".to_string(),
            version: version.to_string(),
            root,
            executable: Some(executable),
        })
    }

    pub fn with_package(mut self, package: RuntimePackage) -> Self {
        self.packages.push(package);
        self
    }
}

impl RuntimeRegistry for StaticRuntimeRegistry {
    fn find(&self, request: &str) -> Result<Vec<RuntimePackage>> {
        Ok(self
            .packages
            .iter()
            .filter(|p| p.version == request)
            .cloned()
            .collect())
    }
}

/// One recorded [`Installer::install`] call
#[derive(Debug, Clone)]
pub struct InstallerCall {
    pub query: String,
    pub runtime_version: String,
    pub runtime_executable: PathBuf,
    pub companion_tool: PathBuf,
    pub work_area: PathBuf,
    pub release: bool,
}

/// Installer returning canned artifacts and recording every call
#[derive(Debug, Default)]
pub struct FakeInstaller {
    artifacts: Vec<Artifact>,
    failing_runtime: Option<String>,
    calls: RefCell<Vec<InstallerCall>>,
}

impl FakeInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Artifact staged on every call
    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    /// Fail every call targeting `runtime_version`
    pub fn failing_on(mut self, runtime_version: &str) -> Self {
        self.failing_runtime = Some(runtime_version.to_string());
        self
    }

    pub fn calls(&self) -> Vec<InstallerCall> {
        self.calls.borrow().clone()
    }
}

impl Installer for FakeInstaller {
    fn companion_tool(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/opt/pip/pip.pyz"))
    }

    fn install(
        &self,
        invocation: &InstallerInvocation<'_>,
        on_artifact: &mut ArtifactCallback<'_>,
    ) -> Result<Vec<Artifact>> {
        self.calls.borrow_mut().push(InstallerCall {
            query: invocation.query.to_string(),
            runtime_version: invocation.runtime_version.to_string(),
            runtime_executable: invocation.runtime_executable.to_path_buf(),
            companion_tool: invocation.companion_tool.to_path_buf(),
            work_area: invocation.work_area.to_path_buf(),
            release: invocation.release,
        });

        if self.failing_runtime.as_deref() == Some(invocation.runtime_version) {
            return Err(install::installer_failed(
                invocation.query,
                invocation.runtime_version,
                "simulated failure",
            ));
        }

        let mut artifacts = self.artifacts.clone();
        for artifact in &mut artifacts {
            let metadata = DistributionMetadata {
                name: artifact.name.clone(),
                version: artifact.version.clone(),
                requires_dist: artifact.requires.clone(),
                ..DistributionMetadata::default()
            };
            on_artifact(artifact, &metadata)?;
        }
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_runtime_layout() {
        let temp = create_temp_dir();
        let exe = create_runtime(temp.path(), "python", "3.10.11");
        assert_eq!(exe, temp.path().join("python/3.10.11/bin/python3"));
        assert!(exe.is_file());
    }

    #[test]
    fn test_static_registry_is_exact() {
        let registry = StaticRuntimeRegistry::new().with_runtime("3.10.11", "/opt/python");
        assert_eq!(registry.find("3.10.11").unwrap().len(), 1);
        assert!(registry.find("3.10").unwrap().is_empty());
    }
}
