//! Installer driven as a subprocess
//!
//! ```text
//! <program> [args] bundled-pip
//! <program> [args] stage --query Q --python-version V --python-executable EXE
//!                        --pip PIP --work-area DIR
//! <program> [args] finalize --manifest FILE --work-area DIR [--release]
//! ```
//!
//! `stage` and `finalize` print JSON documents on stdout (see [`super::protocol`]).
//! Anything the program writes on stderr is forwarded to the debug log.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::protocol::{FinalizeReport, Manifest, ManifestArtifact, StageReport};
use super::{ArtifactCallback, Installer, InstallerInvocation};
use crate::config::InstallerSettings;
use crate::domain::{Artifact, VariantId};
use crate::error::{Result, install::installer_failed};

/// Number of trailing stderr lines kept in error messages
const STDERR_TAIL_LINES: usize = 20;

/// Installer program speaking the stage / finalize JSON protocol
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
    companion_tool: Option<PathBuf>,
}

impl CommandInstaller {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            companion_tool: None,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_companion_tool(mut self, companion_tool: Option<PathBuf>) -> Self {
        self.companion_tool = companion_tool;
        self
    }

    pub fn from_settings(settings: &InstallerSettings) -> Self {
        Self::new(settings.program.clone())
            .with_args(settings.args.clone())
            .with_companion_tool(settings.pip.clone())
    }

    /// Run one installer subcommand and return its stdout.
    /// `query` and `runtime` only label errors.
    fn run(&self, subcommand: &[OsString], query: &str, runtime: &str) -> Result<Vec<u8>> {
        let mut command = Command::new(&self.program);
        command.args(&self.args).args(subcommand);
        debug!("running {:?}", command);

        let output = command.output().map_err(|e| {
            installer_failed(query, runtime, format!("cannot run {}: {}", self.program, e))
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines() {
            debug!("[{}] {}", self.program, line);
        }

        if !output.status.success() {
            let lines: Vec<&str> = stderr.lines().collect();
            let tail = lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..].join("\n");
            return Err(installer_failed(
                query,
                runtime,
                format!("{} exited with {}\n{}", self.program, output.status, tail)
                    .trim_end()
                    .to_string(),
            ));
        }

        Ok(output.stdout)
    }

    fn parse<T: DeserializeOwned>(stdout: &[u8], what: &str, query: &str, runtime: &str) -> Result<T> {
        serde_json::from_slice(stdout)
            .map_err(|e| installer_failed(query, runtime, format!("invalid {what} report: {e}")))
    }

    fn stage(&self, invocation: &InstallerInvocation<'_>) -> Result<StageReport> {
        let subcommand: Vec<OsString> = vec![
            "stage".into(),
            "--query".into(),
            invocation.query.into(),
            "--python-version".into(),
            invocation.runtime_version.into(),
            "--python-executable".into(),
            invocation.runtime_executable.into(),
            "--pip".into(),
            invocation.companion_tool.into(),
            "--work-area".into(),
            invocation.work_area.into(),
        ];
        let stdout = self.run(&subcommand, invocation.query, invocation.runtime_version)?;
        Self::parse(&stdout, "stage", invocation.query, invocation.runtime_version)
    }

    fn finalize(
        &self,
        invocation: &InstallerInvocation<'_>,
        artifacts: &[Artifact],
    ) -> Result<FinalizeReport> {
        let manifest = Manifest {
            query: invocation.query.to_string(),
            runtime_version: invocation.runtime_version.to_string(),
            release: invocation.release,
            artifacts: artifacts.iter().map(ManifestArtifact::from).collect(),
        };
        let manifest_path = write_manifest(invocation, &manifest)?;

        let mut subcommand: Vec<OsString> = vec![
            "finalize".into(),
            "--manifest".into(),
            manifest_path.into(),
            "--work-area".into(),
            invocation.work_area.into(),
        ];
        if invocation.release {
            subcommand.push("--release".into());
        }

        let stdout = self.run(&subcommand, invocation.query, invocation.runtime_version)?;
        Self::parse(&stdout, "finalize", invocation.query, invocation.runtime_version)
    }
}

/// Write `<work area>/<runtime>-manifest.json` for the finalize phase
fn write_manifest(invocation: &InstallerInvocation<'_>, manifest: &Manifest) -> Result<PathBuf> {
    let fail = |reason: String| installer_failed(invocation.query, invocation.runtime_version, reason);

    let manifest_path = invocation
        .work_area
        .join(format!("{}-manifest.json", invocation.runtime_version));
    let content = serde_json::to_vec_pretty(manifest)
        .map_err(|e| fail(format!("cannot serialize manifest: {e}")))?;
    fs::write(&manifest_path, content)
        .map_err(|e| fail(format!("cannot write {}: {}", manifest_path.display(), e)))?;

    Ok(manifest_path)
}

/// Attach finalized variants to the staged artifacts, matched by name
fn merge_variants(artifacts: &mut [Artifact], report: FinalizeReport) {
    for finalized in report.artifacts {
        let Some(artifact) = artifacts.iter_mut().find(|a| a.name == finalized.name) else {
            warn!("installer finalized unknown artifact {}", finalized.name);
            continue;
        };
        artifact.installed_variants = finalized
            .installed_variants
            .into_iter()
            .map(VariantId::from)
            .collect();
        artifact.skipped_variants = finalized
            .skipped_variants
            .into_iter()
            .map(VariantId::from)
            .collect();
    }
}

impl Installer for CommandInstaller {
    fn companion_tool(&self) -> Result<PathBuf> {
        if let Some(path) = &self.companion_tool {
            return Ok(path.clone());
        }

        let stdout = self.run(&["bundled-pip".into()], "bundled-pip", "-")?;
        let path = String::from_utf8_lossy(&stdout).trim().to_string();
        if path.is_empty() {
            return Err(installer_failed(
                "bundled-pip",
                "-",
                format!("{} did not report a pip path", self.program),
            ));
        }
        Ok(PathBuf::from(path))
    }

    fn install(
        &self,
        invocation: &InstallerInvocation<'_>,
        on_artifact: &mut ArtifactCallback<'_>,
    ) -> Result<Vec<Artifact>> {
        let staged = self.stage(invocation)?;

        let mut artifacts = Vec::with_capacity(staged.artifacts.len());
        for entry in staged.artifacts {
            let (mut artifact, metadata) = entry.into_parts();
            on_artifact(&mut artifact, &metadata)?;
            artifacts.push(artifact);
        }

        let report = self.finalize(invocation, &artifacts)?;
        merge_variants(&mut artifacts, report);
        Ok(artifacts)
    }
}
