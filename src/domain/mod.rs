//! Domain models for Wheelwright
//!
//! This module contains pure domain objects representing core business entities:
//! the package specs operators declare, the requests users type, the artifacts the
//! external installer produces and the aggregated result of a run.

pub mod artifact;
pub mod package;
pub mod request;
pub mod result;

pub use artifact::{Artifact, ArtifactSummary, DistributionMetadata, VariantId};
pub use package::PackageVersionSpec;
pub use request::InstallRequest;
pub use result::{InstallResult, RuntimeArtifacts};
