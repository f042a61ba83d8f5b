//! Wheelwright - declarative pip package installer
//!
//! Reads package specs from a spec store and builds every requested pip
//! package as runtime-scoped artifacts, once per target runtime version,
//! through an external installer.

use clap::Parser;
use tracing::info;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod hooks;
mod installer;
mod logging;
mod operations;
mod runtime;
mod temp;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::Cli;
use error::Result;

fn run(cli: &Cli) -> Result<()> {
    if cli.list {
        return commands::list::run(cli);
    }

    info!("started");
    commands::install::run(cli)?;
    info!("finished");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = tracing::subscriber::with_default(logging::subscriber(cli.debug), || run(&cli));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
