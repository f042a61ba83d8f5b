//! Scratch directories
//!
//! Each spec gets one scratch directory, shared by all of its runtime targets
//! so the installer can reuse downloads, and removed when the dispatch ends
//! whatever the outcome. Temp dirs are never created under the current
//! working directory (e.g. when TMPDIR=tmp or TMPDIR=./tmp).

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, warn};

use crate::error::{Result, install::scratch_dir_failed};

const SCRATCH_SUFFIX: &str = "-wheelwright";

/// Returns a directory path suitable for creating temporary directories.
/// Never returns a relative path.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Exclusively owned working directory, removed on drop
#[derive(Debug)]
pub struct ScratchDir {
    dir: Option<TempDir>,
    path: PathBuf,
}

impl ScratchDir {
    /// Create `<base>/<name>XXXXXX-wheelwright`
    pub fn create(name: &str, base: Option<&Path>) -> Result<Self> {
        let base = base.map_or_else(temp_dir_base, Path::to_path_buf);
        let dir = tempfile::Builder::new()
            .prefix(name)
            .suffix(SCRATCH_SUFFIX)
            .tempdir_in(&base)
            .map_err(|e| scratch_dir_failed(name, format!("{}: {}", base.display(), e)))?;
        let path = dir.path().to_path_buf();
        debug!("created scratch directory {}", path.display());
        Ok(Self {
            dir: Some(dir),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            debug!("removing {}", self.path.display());
            if let Err(e) = dir.close() {
                warn!("failed to remove {}: {}", self.path.display(), e);
            }
        }
    }
}
