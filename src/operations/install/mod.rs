//! Install operation submodules

pub mod dispatcher;
pub mod selection;

pub use dispatcher::InstallDispatcher;
pub use selection::InstallSelection;
