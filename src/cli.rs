//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// Wheelwright - declarative pip package installer
///
/// Installs pip packages as runtime-scoped artifacts through an external installer.
#[derive(Parser, Debug)]
#[command(
    name = "wheelwright",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Declarative installer for runtime-scoped pip packages",
    long_about = "Wheelwright reads package specs from a spec store and rebuilds every \
                  requested pip package, with its dependencies, once per target runtime \
                  version through an external installer.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  wheelwright sphinx\n    \
                  wheelwright sphinx:==7.2.6 pytest\n    \
                  wheelwright --release sphinx\n    \
                  wheelwright --keep-going sphinx pytest\n    \
                  wheelwright --list"
)]
pub struct Cli {
    /// Package ids to install: `name` or `name:version`
    #[arg(value_name = "PACKAGE_ID", required_unless_present = "list")]
    pub package_ids: Vec<String>,

    /// Debug-level logging for this run
    #[arg(long)]
    pub debug: bool,

    /// Publish to the shared registry instead of building locally
    #[arg(long)]
    pub release: bool,

    /// Record failures per package id and continue with the next one
    #[arg(long)]
    pub keep_going: bool,

    /// List spec store entries and exit
    #[arg(long)]
    pub list: bool,

    /// Tool configuration file
    #[arg(long, short = 'c', env = "WHEELWRIGHT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Spec store directory
    #[arg(long, env = "WHEELWRIGHT_PACKAGES_DIR", value_name = "DIR")]
    pub packages_dir: Option<PathBuf>,

    /// External installer program
    #[arg(long, env = "WHEELWRIGHT_INSTALLER", value_name = "PROG")]
    pub installer: Option<String>,

    /// Companion pip executable passed to the installer
    #[arg(long, env = "WHEELWRIGHT_PIP", value_name = "PATH")]
    pub pip: Option<PathBuf>,

    /// Runtime registry search path (repeatable, replaces configured paths)
    #[arg(long = "runtime-path", value_name = "DIR")]
    pub runtime_paths: Vec<PathBuf>,
}
