//! Dependency loosening hook
//!
//! Plugin packages such as `sphinxcontrib-*` are required by their root
//! package and require it back, which the target ecosystem rejects as a cycle.
//! Turning the plugin's requirements into weak references (`~name`) keeps them
//! satisfied by whatever is installed without forcing a resolve.

use tracing::info;

use super::MutationHook;
use crate::domain::{Artifact, DistributionMetadata};
use crate::error::Result;

const WEAK_PREFIX: char = '~';

/// Rewrites the requirements of `prefix*` artifacts other than the root package
#[derive(Debug, Clone)]
pub struct LoosenDependencies {
    prefix: String,
    root: String,
}

impl LoosenDependencies {
    pub fn new(prefix: impl Into<String>, root: Option<String>) -> Self {
        let prefix = prefix.into();
        let root = root.unwrap_or_else(|| prefix.clone());
        Self { prefix, root }
    }

    fn applies_to(&self, name: &str) -> bool {
        name.starts_with(&self.prefix) && name != self.root
    }
}

impl MutationHook for LoosenDependencies {
    fn name(&self) -> &str {
        "loosenDependencies"
    }

    fn apply(&self, artifact: &mut Artifact, _metadata: &DistributionMetadata) -> Result<bool> {
        if !self.applies_to(&artifact.name) {
            return Ok(false);
        }

        let mut changed = false;
        for require in &mut artifact.requires {
            if !require.starts_with(WEAK_PREFIX) {
                require.insert(0, WEAK_PREFIX);
                changed = true;
            }
        }

        if changed {
            info!("patching {}", artifact.name);
        }
        Ok(changed)
    }
}
