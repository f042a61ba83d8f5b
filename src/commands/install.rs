//! Install command implementation
//!
//! Wires settings, spec store, runtime registry and installer together, runs
//! the selection and logs the report.

use tracing::info;

use crate::cli::Cli;
use crate::config::SpecStore;
use crate::error::{Result, install};
use crate::installer::CommandInstaller;
use crate::operations::{InstallDispatcher, InstallSelection};
use crate::runtime::DirectoryRuntimeRegistry;
use crate::ui::report;

/// Run install command
pub fn run(cli: &Cli) -> Result<()> {
    let settings = super::load_settings(cli)?;

    let store = SpecStore::new(&settings.packages_dir);
    let registry = DirectoryRuntimeRegistry::new(
        settings.runtimes.search_paths.clone(),
        settings.runtimes.family.clone(),
    );
    let installer = CommandInstaller::from_settings(&settings.installer);
    let dispatcher = InstallDispatcher::new(&installer, &registry)
        .with_scratch_base(settings.scratch_dir.clone());

    let result = InstallSelection::new(&store, &dispatcher)
        .keep_going(cli.keep_going)
        .run(&cli.package_ids, cli.release)?;

    let mut lines = vec![report::summary_line(&result)];
    lines.extend(report::render(&result));
    info!("{}", lines.join("\n"));

    if result.has_failures() {
        return Err(install::requests_failed(
            result.failures.len(),
            cli.package_ids.len(),
        ));
    }

    Ok(())
}
