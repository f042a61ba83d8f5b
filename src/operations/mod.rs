//! Operations module
//!
//! This module provides the install workflow:
//! - InstallDispatcher: builds one spec for each of its runtime versions
//! - InstallSelection: turns package identifiers into specs and dispatches them
//!
//! The operations coordinate with:
//! - SpecStore: package spec documents (from config module)
//! - RuntimeResolver: runtime executables (from runtime module)
//! - Installer: the external installer (from installer module)
//! - PatchCallback: mutation hooks (from hooks module)

pub mod install;

pub use install::{InstallDispatcher, InstallSelection};
