//! List command implementation
//!
//! Prints the package names available in the spec store, one per line.

use crate::cli::Cli;
use crate::config::SpecStore;
use crate::error::Result;

/// Run list command
pub fn run(cli: &Cli) -> Result<()> {
    let settings = super::load_settings(cli)?;
    let store = SpecStore::new(&settings.packages_dir);

    let names = store.names();
    if names.is_empty() {
        println!("No packages in {}.", store.root().display());
        return Ok(());
    }

    for name in names {
        println!("{name}");
    }

    Ok(())
}
