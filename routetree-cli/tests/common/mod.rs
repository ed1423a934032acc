//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's configuration
//! - Route schema fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The example navigation schema.
#[allow(dead_code)]
pub const NAVIGATION_YAML: &str = r#"index: ""
aboutUs: /about-us
dashboard:
  home: /
  users:
    list: /
auth:
  _basePath: ""
  login: /login
  register: /register
"#;

/// Test environment with an isolated working and home directory.
///
/// Commands run inside the temporary directory with `HOME` pointing at it,
/// so neither project nor user configuration leaks in from the host.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("routetree").expect("Failed to find routetree binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("ROUTETREE_CONFIG")
            .env_remove("ROUTETREE_BASE_PATH")
            .env_remove("ROUTETREE_OUTPUT_FORMAT")
            .env_remove("ROUTETREE_SCHEMA")
            .env_remove("ROUTETREE_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the example navigation schema and return its path.
    pub fn navigation_schema(&self) -> PathBuf {
        self.write_file("routes.yaml", NAVIGATION_YAML)
    }

    /// Run `routetree resolve` with extra arguments and return stdout.
    pub fn resolve(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("resolve")
            .args(args)
            .output()
            .expect("Failed to run resolve command");

        assert!(
            output.status.success(),
            "Resolve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
