//! Tool settings (`config.yaml`)
//!
//! Every field is optional. Values are resolved in this order: command line
//! flag or environment variable, then the configuration file, then defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, config, fs as fs_error};

const CONFIG_DIR_NAME: &str = "wheelwright";
const CONFIG_FILE_NAME: &str = "config.yaml";
const DEFAULT_INSTALLER: &str = "wheelwright-installer";
const DEFAULT_RUNTIME_FAMILY: &str = "python";

/// Tool settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Spec store directory
    #[serde(default = "default_packages_dir")]
    pub packages_dir: PathBuf,

    /// Where scratch directories are created (absolute temp dir when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scratch_dir: Option<PathBuf>,

    /// External installer
    #[serde(default)]
    pub installer: InstallerSettings,

    /// Runtime registry
    #[serde(default)]
    pub runtimes: RuntimeSettings,
}

/// External installer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerSettings {
    /// Installer program, looked up on PATH when not a path
    #[serde(default = "default_installer")]
    pub program: String,

    /// Arguments inserted before the installer subcommand
    #[serde(default)]
    pub args: Vec<String>,

    /// Pip executable handed to the installer, asked from the installer when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pip: Option<PathBuf>,
}

/// Runtime registry settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSettings {
    /// Runtime package family (directory name under each search path)
    #[serde(default = "default_runtime_family")]
    pub family: String,

    /// Package repositories searched in order
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<PathBuf>,
}

fn default_packages_dir() -> PathBuf {
    PathBuf::from("packages")
}

fn default_installer() -> String {
    DEFAULT_INSTALLER.to_string()
}

fn default_runtime_family() -> String {
    DEFAULT_RUNTIME_FAMILY.to_string()
}

fn default_search_paths() -> Vec<PathBuf> {
    dirs::home_dir()
        .map(|home| vec![home.join("packages")])
        .unwrap_or_default()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            packages_dir: default_packages_dir(),
            scratch_dir: None,
            installer: InstallerSettings::default(),
            runtimes: RuntimeSettings::default(),
        }
    }
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            program: default_installer(),
            args: Vec::new(),
            pip: None,
        }
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            family: default_runtime_family(),
            search_paths: default_search_paths(),
        }
    }
}

impl Settings {
    /// Default location of the configuration file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings from an explicit file (which must exist), else from the
    /// default location when present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(config::not_found(path.display().to_string()));
            }
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("loading configuration {}", path.display());
        let origin = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| fs_error::read_failed(&origin, e.to_string()))?;
        Self::from_yaml(&content, &origin)
    }

    /// Parse settings from a YAML string; `origin` names it in errors
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        let mut settings: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| config::parse_failed(origin, e.to_string()))?
        };
        settings.expand_home();
        Ok(settings)
    }

    fn expand_home(&mut self) {
        self.packages_dir = expand_home(&self.packages_dir);
        self.scratch_dir = self.scratch_dir.as_deref().map(expand_home);
        self.installer.pip = self.installer.pip.as_deref().map(expand_home);
        self.runtimes.search_paths = self
            .runtimes
            .search_paths
            .iter()
            .map(|path| expand_home(path))
            .collect();
    }
}

/// Replace a leading `~` with the home directory
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
