//! Package spec documents (`<package>.yaml`) data structures

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::PackageVersionSpec;
use crate::error::{Result, spec};
use crate::hooks::HookConfig;

/// One spec store entry: every version of a package to rebuild
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDocument {
    /// Package name on the source registry
    pub name: String,

    /// Version descriptors, processed in declaration order
    pub versions: Vec<VersionDescriptor>,
}

/// One version of a package and the runtimes to build it for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionDescriptor {
    /// Pip version constraint, empty or missing means latest
    #[serde(default)]
    pub version: String,

    /// Exact runtime versions (major.minor.patch)
    pub pythons: Vec<String>,

    /// Mutation hook applied to every produced artifact; missing or null means none
    #[serde(default, deserialize_with = "null_as_no_hook")]
    pub callback: HookConfig,
}

fn null_as_no_hook<'de, D>(deserializer: D) -> std::result::Result<HookConfig, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HookConfig>::deserialize(deserializer)?.unwrap_or_default())
}

impl PackageDocument {
    /// Parse and validate a document; `origin` names it in errors
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        let document: Self =
            serde_yaml::from_str(yaml).map_err(|e| spec::parse_failed(origin, e.to_string()))?;
        document.validate(origin)?;
        Ok(document)
    }

    /// Validate the invariants of every spec the document produces
    pub fn validate(&self, origin: &str) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(spec::invalid(origin, "package name is empty"));
        }

        for descriptor in &self.versions {
            let label = if descriptor.version.is_empty() {
                "latest"
            } else {
                descriptor.version.as_str()
            };

            if descriptor.pythons.is_empty() {
                return Err(spec::invalid(
                    origin,
                    format!("version {label} lists no runtime versions"),
                ));
            }

            let mut seen = HashSet::new();
            for python in &descriptor.pythons {
                if !seen.insert(python.as_str()) {
                    return Err(spec::invalid(
                        origin,
                        format!("version {label} lists runtime {python} more than once"),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Convert into one spec per version descriptor, all sharing the document name
    pub fn into_specs(self) -> Vec<PackageVersionSpec> {
        let name = self.name;
        self.versions
            .into_iter()
            .map(|descriptor| {
                PackageVersionSpec::new(name.clone(), descriptor.version, descriptor.pythons)
                    .with_hook(descriptor.callback)
            })
            .collect()
    }
}
