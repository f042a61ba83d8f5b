//! Runtime registry backed by package repositories on disk
//!
//! Layout: `<search path>/<family>/<version>/` with the interpreter at
//! `bin/python3`, `bin/python` or `python.exe` inside the version directory.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{RuntimePackage, RuntimeRegistry};
use crate::error::Result;

const EXECUTABLE_CANDIDATES: &[&str] = &["bin/python3", "bin/python", "python.exe"];

/// Registry scanning `<search path>/<family>/<version>` directories
#[derive(Debug, Clone)]
pub struct DirectoryRuntimeRegistry {
    search_paths: Vec<PathBuf>,
    family: String,
}

impl DirectoryRuntimeRegistry {
    pub fn new(search_paths: Vec<PathBuf>, family: impl Into<String>) -> Self {
        Self {
            search_paths,
            family: family.into(),
        }
    }

    /// Version directories of one repository, latest first
    fn versions_in(&self, repository: &Path) -> Vec<(String, PathBuf)> {
        let family_dir = repository.join(&self.family);
        if !family_dir.is_dir() {
            debug!("no {} packages in {}", self.family, repository.display());
            return Vec::new();
        }

        let mut versions: Vec<(String, PathBuf)> = WalkDir::new(&family_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_dir())
            .filter_map(|e| {
                let version = e.file_name().to_str()?.to_string();
                Some((version, e.into_path()))
            })
            .collect();
        versions.sort_by(|(a, _), (b, _)| compare_versions(b, a));
        versions
    }
}

impl RuntimeRegistry for DirectoryRuntimeRegistry {
    fn find(&self, request: &str) -> Result<Vec<RuntimePackage>> {
        let mut packages = Vec::new();

        for repository in &self.search_paths {
            for (version, root) in self.versions_in(repository) {
                if !version_matches(request, &version) {
                    continue;
                }

                let executable = find_executable(&root);
                if executable.is_none() {
                    warn!("{}-{} has no interpreter in {}", self.family, version, root.display());
                }
                packages.push(RuntimePackage {
                    family: self.family.clone(),
                    version,
                    root,
                    executable,
                });
            }
        }

        Ok(packages)
    }
}

/// First existing interpreter of a runtime package, canonicalized
fn find_executable(root: &Path) -> Option<PathBuf> {
    EXECUTABLE_CANDIDATES
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| path.is_file())
        .map(|path| dunce::canonicalize(&path).unwrap_or(path))
}

/// A request matches a version equal to it or extending it by whole dot components
fn version_matches(request: &str, version: &str) -> bool {
    version == request
        || version
            .strip_prefix(request)
            .is_some_and(|rest| rest.starts_with('.'))
}

/// Compare dotted versions component by component, numerically where possible
fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    _ => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}
