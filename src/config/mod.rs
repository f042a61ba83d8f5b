//! Configuration file handling for Wheelwright
//!
//! This module contains data structures for:
//! - `<package>.yaml` - Package spec documents in the spec store
//! - `config.yaml` - Tool settings (spec store, installer, runtime registry)

pub mod package;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use package::PackageDocument;
pub use settings::{InstallerSettings, Settings};
pub use store::SpecStore;
