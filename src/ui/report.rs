//! Run report
//!
//! One block per (spec, runtime) pair, in processing order:
//!
//! ```text
//! [sphinx==7.2.6][python-3.10.11] 3 processed:
//!     installed:
//!       - sphinx-7.2.6
//!     skipped:
//!       - alabaster-0.7.13
//!     patched:
//!       - sphinxcontrib_applehelp
//! ```

use crate::domain::{InstallResult, RuntimeArtifacts, VariantId};

const INDENT: &str = "    ";

/// Header logged before the report lines
pub fn summary_line(result: &InstallResult) -> String {
    format!("processed {} versions:", result.len())
}

/// Render the report lines of a run
pub fn render(result: &InstallResult) -> Vec<String> {
    let mut lines = Vec::new();

    for outcome in &result.outcomes {
        let query = outcome.spec.query();
        for runtime in &outcome.runtimes {
            render_runtime(&query, runtime, &mut lines);
        }
    }

    if result.has_failures() {
        lines.push(format!("failed {} requests:", result.failures.len()));
        for failure in &result.failures {
            lines.push(format!("  - {}: {}", failure.request, failure.message));
        }
    }

    lines
}

fn render_runtime(query: &str, runtime: &RuntimeArtifacts, lines: &mut Vec<String>) {
    let artifacts = &runtime.artifacts;
    lines.push(format!(
        "[{}][python-{}] {} processed:",
        query,
        runtime.runtime_version,
        artifacts.len()
    ));

    lines.push(format!("{INDENT}installed:"));
    lines.extend(
        artifacts
            .iter()
            .filter(|a| a.is_installed())
            .map(|a| item(&variants(&a.installed_variants))),
    );

    lines.push(format!("{INDENT}skipped:"));
    lines.extend(
        artifacts
            .iter()
            .filter(|a| a.is_skipped())
            .map(|a| item(&variants(&a.skipped_variants))),
    );

    lines.push(format!("{INDENT}patched:"));
    lines.extend(
        artifacts
            .iter()
            .filter(|a| a.patched)
            .map(|a| item(&a.name)),
    );
}

fn item(text: &str) -> String {
    format!("{INDENT}  - {text}")
}

fn variants(ids: &[VariantId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
