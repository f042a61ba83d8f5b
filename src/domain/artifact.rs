//! Artifact domain types
//!
//! An artifact is one package built by the external installer for one
//! (spec, runtime) pair. The installer may produce several of them per query
//! since every dependency of the requested package is rebuilt as well.

use std::fmt;

/// Identifier of one built variant of an artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantId {
    pub name: String,
    pub version: String,
}

impl VariantId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.version)
    }
}

/// One package produced by the external installer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Artifact {
    /// Package name in the target ecosystem
    pub name: String,

    /// Package version in the target ecosystem
    pub version: String,

    /// Declared requirements, rewritten in place by mutation hooks
    pub requires: Vec<String>,

    /// Variants built (and released, in release mode) by this run
    pub installed_variants: Vec<VariantId>,

    /// Variants that already existed and were left untouched
    pub skipped_variants: Vec<VariantId>,

    /// Set by the patch callback when a mutation hook changed the artifact
    pub patched: bool,
}

impl Artifact {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = requires.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_installed(&self) -> bool {
        !self.installed_variants.is_empty()
    }

    pub fn is_skipped(&self) -> bool {
        !self.skipped_variants.is_empty()
    }
}

/// Installer-native metadata of the source distribution an artifact was built from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistributionMetadata {
    pub name: String,
    pub version: String,
    pub requires_dist: Vec<String>,
    pub requires_python: Option<String>,
    pub summary: Option<String>,
}

/// Installed / skipped / patched counts over the artifacts of one runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArtifactSummary {
    pub installed: usize,
    pub skipped: usize,
    pub patched: usize,
}

impl ArtifactSummary {
    pub fn of(artifacts: &[Artifact]) -> Self {
        let installed = artifacts.iter().filter(|a| a.is_installed()).count();
        Self {
            installed,
            skipped: artifacts.len() - installed,
            patched: artifacts.iter().filter(|a| a.patched).count(),
        }
    }
}
