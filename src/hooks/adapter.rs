//! Patch callback adapter
//!
//! The installer calls back once per staged artifact with
//! `(&mut Artifact, &DistributionMetadata)`. [`PatchCallback`] sits between that
//! call and the spec's hook: it does nothing without a hook, records the
//! hook's answer on the artifact's `patched` flag and puts hook errors in the
//! mutation hook error domain.

use tracing::debug;

use super::MutationHook;
use crate::domain::{Artifact, DistributionMetadata};
use crate::error::{Result, WheelwrightError, install::hook_failed};

/// Decorator around an optional mutation hook
pub struct PatchCallback<'a> {
    hook: Option<&'a dyn MutationHook>,
}

impl<'a> PatchCallback<'a> {
    pub fn new(hook: Option<&'a dyn MutationHook>) -> Self {
        Self { hook }
    }

    /// Run the hook on one artifact. The patched flag is only ever set, never cleared.
    pub fn invoke(&self, artifact: &mut Artifact, metadata: &DistributionMetadata) -> Result<()> {
        let Some(hook) = self.hook else {
            return Ok(());
        };

        let mutated = hook.apply(artifact, metadata).map_err(|e| match e {
            WheelwrightError::MutationHookFailed { .. } => e,
            other => hook_failed(hook.name(), &artifact.name, other.to_string()),
        })?;

        if mutated && !artifact.patched {
            debug!("{} patched {}", hook.name(), artifact.name);
            artifact.patched = true;
        }
        Ok(())
    }
}
