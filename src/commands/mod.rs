//! Command implementations for Wheelwright CLI

pub mod install;
pub mod list;

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::Result;

/// Load settings and apply command line overrides on top
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;

    if let Some(packages_dir) = &cli.packages_dir {
        settings.packages_dir.clone_from(packages_dir);
    }
    if let Some(installer) = &cli.installer {
        settings.installer.program.clone_from(installer);
    }
    if let Some(pip) = &cli.pip {
        settings.installer.pip = Some(pip.clone());
    }
    if !cli.runtime_paths.is_empty() {
        settings.runtimes.search_paths.clone_from(&cli.runtime_paths);
    }

    Ok(settings)
}
