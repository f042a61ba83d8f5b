//! Logging setup
//!
//! Builds the run's `tracing` subscriber: a `fmt` layer on stdout filtered by
//! `RUST_LOG` (default `info`). The caller scopes it to the run with
//! [`tracing::subscriber::with_default`], so nothing is installed globally.

use std::io::IsTerminal;

use tracing::Subscriber;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, prelude::*};

const DEFAULT_LEVEL: &str = "info";
const DEBUG_DIRECTIVE: &str = "wheelwright=debug";

/// Filter for one run; `debug` raises this crate to debug level
pub fn env_filter(debug: bool) -> EnvFilter {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    if !debug {
        return filter;
    }
    match DEBUG_DIRECTIVE.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Subscriber writing plain log lines to stdout
pub fn subscriber(debug: bool) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry().with(env_filter(debug)).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(std::io::stdout().is_terminal())
            .with_target(true)
            .with_thread_ids(false),
    )
}
