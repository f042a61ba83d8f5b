//! Common test utilities for Wheelwright integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Stage report of the `alpha` package: alpha itself plus one dependency
#[allow(dead_code)]
pub const ALPHA_STAGE: &str = r#"{
  "artifacts": [
    {"name": "alpha", "version": "1.0", "requires": ["six"],
     "metadata": {"name": "alpha", "version": "1.0", "requires_dist": ["six"]}},
    {"name": "six", "version": "1.16.0"}
  ]
}"#;

/// Finalize report matching [`ALPHA_STAGE`]: alpha installed, six already present
#[allow(dead_code)]
pub const ALPHA_FINALIZE: &str = r#"{
  "artifacts": [
    {"name": "alpha", "installed_variants": [{"name": "alpha", "version": "1.0"}]},
    {"name": "six", "skipped_variants": [{"name": "six", "version": "1.16.0"}]}
  ]
}"#;

/// Spec document of `alpha`: two versions, the second on two runtimes
#[allow(dead_code)]
pub const ALPHA_SPEC: &str = r#"name: alpha
versions:
  - version: "==1.0"
    pythons: ["3.10.11"]
  - version: "==1.1"
    pythons: ["3.10.11", "3.11.4"]
"#;

/// Installer speaking the stage / finalize protocol from canned JSON files.
/// Every invocation is appended to `calls.log` next to the script.
#[allow(dead_code)]
const FAKE_INSTALLER: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
echo "$@" >> "$dir/calls.log"
case "$1" in
  bundled-pip)
    echo "/opt/pip/pip.pyz"
    ;;
  stage)
    if [ -f "$dir/fail-stage" ]; then
      echo "resolver exploded" >&2
      exit 3
    fi
    cat "$dir/stage.json"
    ;;
  finalize)
    cp "$3" "$dir/last-manifest.json"
    cat "$dir/finalize.json"
    ;;
  *)
    echo "unknown command $1" >&2
    exit 2
    ;;
esac
"#;

/// A self-contained environment: spec store, runtime registry, scratch root
/// and configuration file, all under one temp directory
pub struct TestEnv {
    pub temp: TempDir,
    pub packages: PathBuf,
    pub runtimes: PathBuf,
    pub scratch: PathBuf,
    pub config: PathBuf,
    pub installer_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        let env = Self {
            packages: root.join("packages"),
            runtimes: root.join("runtimes"),
            scratch: root.join("scratch"),
            config: root.join("config.yaml"),
            installer_dir: root.join("installer"),
            temp,
        };
        for dir in [&env.packages, &env.runtimes, &env.scratch, &env.installer_dir] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }
        std::fs::write(
            &env.config,
            format!("scratch_dir: {}\n", env.scratch.display()),
        )
        .expect("Failed to write config");
        env
    }

    /// Write `<packages>/<file_name>`
    pub fn write_spec(&self, file_name: &str, content: &str) {
        std::fs::write(self.packages.join(file_name), content).expect("Failed to write spec");
    }

    /// Create `<runtimes>/python/<version>/bin/python3`
    #[allow(dead_code)]
    pub fn create_runtime(&self, version: &str) {
        let bin = self.runtimes.join("python").join(version).join("bin");
        std::fs::create_dir_all(&bin).expect("Failed to create runtime");
        std::fs::write(bin.join("python3"), "#!/bin/sh\n").expect("Failed to write interpreter");
    }

    /// Install the fake installer with the reports it prints
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn fake_installer(&self, stage: &str, finalize: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.installer_dir.join("fake-installer");
        std::fs::write(&script, FAKE_INSTALLER).expect("Failed to write installer");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make installer executable");
        std::fs::write(self.installer_dir.join("stage.json"), stage).expect("Failed to write stage");
        std::fs::write(self.installer_dir.join("finalize.json"), finalize)
            .expect("Failed to write finalize");
        script
    }

    /// Make the fake installer fail its stage phase
    #[allow(dead_code)]
    pub fn fail_stage(&self) {
        std::fs::write(self.installer_dir.join("fail-stage"), "").expect("Failed to write marker");
    }

    /// Lines the fake installer was invoked with
    #[allow(dead_code)]
    pub fn installer_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.installer_dir.join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Manifest the fake installer received on its last finalize
    #[allow(dead_code)]
    pub fn last_manifest(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.installer_dir.join("last-manifest.json"))
            .expect("Failed to read manifest");
        serde_json::from_str(&content).expect("Failed to parse manifest")
    }

    /// Number of entries left in the scratch root
    #[allow(dead_code)]
    pub fn scratch_entries(&self) -> usize {
        std::fs::read_dir(&self.scratch)
            .expect("Failed to read scratch root")
            .count()
    }

    /// Binary invocation wired to this environment
    pub fn command(&self, installer: &Path) -> Command {
        let mut cmd = wheelwright_cmd();
        cmd.env_remove("RUST_LOG")
            .env_remove("WHEELWRIGHT_PIP")
            .arg("--config")
            .arg(&self.config)
            .arg("--packages-dir")
            .arg(&self.packages)
            .arg("--runtime-path")
            .arg(&self.runtimes)
            .arg("--installer")
            .arg(installer);
        cmd
    }
}

#[allow(deprecated)]
pub fn wheelwright_cmd() -> Command {
    Command::cargo_bin("wheelwright").expect("Failed to find wheelwright binary")
}
