//! Spec store: the directory of package spec documents
//!
//! Every package has one document named after it (`sphinx.yaml`). Documents
//! are discovered on each run and never cached.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::PackageDocument;
use crate::domain::PackageVersionSpec;
use crate::error::{Result, fs as fs_error, spec};

const SPEC_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Directory of package spec documents
#[derive(Debug, Clone)]
pub struct SpecStore {
    root: PathBuf,
}

impl SpecStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All spec documents directly under the store root, sorted by path
    fn documents(&self) -> Vec<PathBuf> {
        let mut documents: Vec<PathBuf> = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| SPEC_EXTENSIONS.contains(&ext))
            })
            .collect();
        documents.sort();
        documents
    }

    /// Names of every package known to the store
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .documents()
            .iter()
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()))
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Locate the single document whose file stem equals `name`
    pub fn find(&self, name: &str) -> Result<PathBuf> {
        let mut matches: Vec<PathBuf> = self
            .documents()
            .into_iter()
            .filter(|path| path.file_stem().and_then(|s| s.to_str()) == Some(name))
            .collect();

        match matches.len() {
            0 => Err(spec::not_found(name, self.root.display().to_string())),
            1 => Ok(matches.remove(0)),
            _ => {
                let candidates: Vec<String> = matches
                    .iter()
                    .filter_map(|path| path.file_name().and_then(|s| s.to_str()))
                    .map(str::to_string)
                    .collect();
                Err(spec::ambiguous(name, &candidates))
            }
        }
    }

    /// Load every spec declared for `name`, in declaration order
    pub fn load(&self, name: &str) -> Result<Vec<PackageVersionSpec>> {
        let path = self.find(name)?;
        debug!("loading package spec {}", path.display());

        let origin = path.display().to_string();
        let content =
            fs::read_to_string(&path).map_err(|e| fs_error::read_failed(&origin, e.to_string()))?;
        let document = PackageDocument::from_yaml(&content, &origin)?;

        Ok(document.into_specs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WheelwrightError;
    use crate::test_fixtures::create_spec_store;

    #[test]
    fn test_load_alpha() {
        let (_temp, store) = create_spec_store(&[(
            "alpha.yaml",
            "name: alpha\nversions:\n  - version: \"==1.0\"\n    pythons: [\"3.10.11\"]\n",
        )]);

        let specs = store.load("alpha").unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].query(), "alpha==1.0");
        assert_eq!(specs[0].target_runtime_versions, vec!["3.10.11"]);
    }

    #[test]
    fn test_missing_package_is_spec_not_found() {
        let (_temp, store) = create_spec_store(&[(
            "alpha.yaml",
            "name: alpha\nversions: []\n",
        )]);

        let err = store.load("beta").unwrap_err();
        assert!(matches!(err, WheelwrightError::SpecNotFound { ref name, .. } if name == "beta"));
    }

    #[test]
    fn test_stem_must_match_exactly() {
        let (_temp, store) = create_spec_store(&[(
            "alpha-extra.yaml",
            "name: alpha-extra\nversions: []\n",
        )]);

        assert!(matches!(
            store.find("alpha").unwrap_err(),
            WheelwrightError::SpecNotFound { .. }
        ));
    }

    #[test]
    fn test_duplicate_documents_are_ambiguous() {
        let (_temp, store) = create_spec_store(&[
            ("alpha.yaml", "name: alpha\nversions: []\n"),
            ("alpha.yml", "name: alpha\nversions: []\n"),
        ]);

        let err = store.find("alpha").unwrap_err();
        assert!(matches!(err, WheelwrightError::AmbiguousSpec { .. }));
        assert!(err.to_string().contains("alpha.yaml, alpha.yml"));
    }

    #[test]
    fn test_other_extensions_are_ignored() {
        let (_temp, store) = create_spec_store(&[
            ("alpha.py", "CONFIG = {}"),
            ("alpha.yaml", "name: alpha\nversions: []\n"),
        ]);

        assert!(store.find("alpha").unwrap().ends_with("alpha.yaml"));
    }

    #[test]
    fn test_names_are_sorted_and_unique() {
        let (_temp, store) = create_spec_store(&[
            ("sphinx.yaml", "name: sphinx\nversions: []\n"),
            ("alpha.yaml", "name: alpha\nversions: []\n"),
            ("alpha.yml", "name: alpha\nversions: []\n"),
            ("notes.txt", "not a spec"),
        ]);

        assert_eq!(store.names(), vec!["alpha", "sphinx"]);
    }

    #[test]
    fn test_missing_store_directory_is_spec_not_found() {
        let store = SpecStore::new("/nonexistent/wheelwright/packages");
        assert!(matches!(
            store.load("alpha").unwrap_err(),
            WheelwrightError::SpecNotFound { .. }
        ));
    }
}
