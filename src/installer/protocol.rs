//! JSON documents exchanged with an installer program
//!
//! `stage` prints a [`StageReport`], `finalize` reads a [`Manifest`] file and
//! prints a [`FinalizeReport`].

use serde::{Deserialize, Serialize};

use crate::domain::{Artifact, DistributionMetadata, VariantId};

/// Output of `stage`: one entry per distribution of the dependency graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageReport {
    #[serde(default)]
    pub artifacts: Vec<StagedArtifact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagedArtifact {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub metadata: MetadataRecord,
}

/// Source distribution metadata as reported by the installer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub requires_dist: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_python: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Input of `finalize`: the staged artifacts after mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub query: String,
    pub runtime_version: String,
    pub release: bool,
    pub artifacts: Vec<ManifestArtifact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestArtifact {
    pub name: String,
    pub version: String,
    pub requires: Vec<String>,
    pub patched: bool,
}

/// Output of `finalize`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinalizeReport {
    #[serde(default)]
    pub artifacts: Vec<FinalizedArtifact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizedArtifact {
    pub name: String,
    #[serde(default)]
    pub installed_variants: Vec<VariantRecord>,
    #[serde(default)]
    pub skipped_variants: Vec<VariantRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantRecord {
    pub name: String,
    pub version: String,
}

impl StagedArtifact {
    /// Split into the mutable artifact and the metadata handed to hooks
    pub fn into_parts(self) -> (Artifact, DistributionMetadata) {
        let metadata = DistributionMetadata {
            name: self.metadata.name,
            version: self.metadata.version,
            requires_dist: self.metadata.requires_dist,
            requires_python: self.metadata.requires_python,
            summary: self.metadata.summary,
        };
        let artifact = Artifact::new(self.name, self.version).with_requires(self.requires);
        (artifact, metadata)
    }
}

impl From<&Artifact> for ManifestArtifact {
    fn from(artifact: &Artifact) -> Self {
        Self {
            name: artifact.name.clone(),
            version: artifact.version.clone(),
            requires: artifact.requires.clone(),
            patched: artifact.patched,
        }
    }
}

impl From<VariantRecord> for VariantId {
    fn from(record: VariantRecord) -> Self {
        VariantId::new(record.name, record.version)
    }
}
