//! Mutation hooks
//!
//! A mutation hook repairs the metadata of an artifact after the installer
//! staged it and before it is finalized. Hooks are selected by name from the
//! spec store (`callback: { kind: ... }`), never loaded as code.

pub mod adapter;
pub mod loosen;

pub use adapter::PatchCallback;
pub use loosen::LoosenDependencies;

use serde::{Deserialize, Serialize};

use crate::domain::{Artifact, DistributionMetadata};
use crate::error::Result;

/// Hook applied to every artifact the installer produces
pub trait MutationHook {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Mutate the artifact in place, returning whether anything changed
    fn apply(&self, artifact: &mut Artifact, metadata: &DistributionMetadata) -> Result<bool>;
}

/// Hook selection as written in a spec store entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HookConfig {
    /// No hook: artifacts are finalized as staged
    #[default]
    None,

    /// Turn every requirement of `prefix*` plugins into a weak reference
    LoosenDependencies {
        prefix: String,
        /// Canonical root package left untouched, defaults to `prefix`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        root: Option<String>,
    },
}

/// Build the hook registered for a configuration, `None` for [`HookConfig::None`]
pub fn build(config: &HookConfig) -> Option<Box<dyn MutationHook>> {
    match config {
        HookConfig::None => None,
        HookConfig::LoosenDependencies { prefix, root } => Some(Box::new(
            LoosenDependencies::new(prefix.clone(), root.clone()),
        )),
    }
}
