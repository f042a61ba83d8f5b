//! Runtime resolution
//!
//! Maps a runtime version request (`3.10.11`) to the executable of an
//! installed runtime package, through a [`RuntimeRegistry`].

pub mod directory;

pub use directory::DirectoryRuntimeRegistry;

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, runtime};

/// One installed runtime package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimePackage {
    pub family: String,
    pub version: String,
    /// Root directory of the package
    pub root: PathBuf,
    /// Interpreter executable, if the package has one
    pub executable: Option<PathBuf>,
}

/// Source of installed runtime packages
pub trait RuntimeRegistry {
    /// Packages matching a version request, preferred first
    fn find(&self, request: &str) -> Result<Vec<RuntimePackage>>;
}

/// Resolves runtime versions to executables through a registry
pub struct RuntimeResolver<'a> {
    registry: &'a dyn RuntimeRegistry,
}

impl<'a> RuntimeResolver<'a> {
    pub fn new(registry: &'a dyn RuntimeRegistry) -> Self {
        Self { registry }
    }

    /// Executable of the first package the registry returns for `version`
    pub fn resolve(&self, version: &str) -> Result<PathBuf> {
        let package = self
            .registry
            .find(version)?
            .into_iter()
            .next()
            .ok_or_else(|| runtime::not_found(version))?;

        debug!(
            "runtime {} resolved to {}-{} at {}",
            version,
            package.family,
            package.version,
            package.root.display()
        );

        package
            .executable
            .ok_or_else(|| runtime::executable_not_found(version, package.root.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WheelwrightError;
    use crate::test_fixtures::StaticRuntimeRegistry;

    #[test]
    fn test_resolve_first_match_wins() {
        let registry = StaticRuntimeRegistry::new()
            .with_runtime("3.10.11", "/opt/python/3.10.11/bin/python")
            .with_runtime("3.10.11", "/other/python/3.10.11/bin/python");

        let exe = RuntimeResolver::new(&registry).resolve("3.10.11").unwrap();
        assert_eq!(exe, PathBuf::from("/opt/python/3.10.11/bin/python"));
    }

    #[test]
    fn test_resolve_no_match() {
        let registry = StaticRuntimeRegistry::new().with_runtime("3.10.11", "/opt/python");

        let err = RuntimeResolver::new(&registry).resolve("9.9.9").unwrap_err();
        assert!(matches!(err, WheelwrightError::RuntimeNotFound { ref version } if version == "9.9.9"));
    }

    #[test]
    fn test_resolve_package_without_executable() {
        let registry = StaticRuntimeRegistry::new().with_package(RuntimePackage {
            family: "python".to_string(),
            version: "3.10.11".to_string(),
            root: PathBuf::from("/opt/python/3.10.11"),
            executable: None,
        });

        let err = RuntimeResolver::new(&registry).resolve("3.10.11").unwrap_err();
        assert!(matches!(err, WheelwrightError::RuntimeExecutableNotFound { .. }));
    }
}
