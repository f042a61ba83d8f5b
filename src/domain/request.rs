//! User package identifiers (`name` or `name:version`)

use std::fmt;

/// One package identifier given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    /// Spec store entry to load
    pub name: String,

    /// Exact version constraint to keep, all versions when absent
    pub version: Option<String>,
}

impl InstallRequest {
    /// Split a token on its first colon; the version keeps any further colons.
    ///
    /// An empty version (`alpha:`) is treated as absent.
    pub fn parse(token: &str) -> Self {
        match token.split_once(':') {
            Some((name, version)) if !version.is_empty() => Self {
                name: name.to_string(),
                version: Some(version.to_string()),
            },
            Some((name, _)) => Self {
                name: name.to_string(),
                version: None,
            },
            None => Self {
                name: token.to_string(),
                version: None,
            },
        }
    }

    /// Whether a spec with the given version constraint is selected by this request
    pub fn matches(&self, version_constraint: &str) -> bool {
        self.version
            .as_deref()
            .is_none_or(|version| version == version_constraint)
    }
}

impl fmt::Display for InstallRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
