//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated working directory with a layout file
//! and command builders for the `treepath` binary.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The HLS layout used by the CLI tests.
#[allow(dead_code)]
pub const HLS_YAML: &str = r#"
mode: url
root:
  path: "videos/{videoId}"
  children:
    manifest: { path: master.m3u8 }
    variantStream:
      path: "stream_{quality}"
      children:
        playlist: { path: playlist.m3u8 }
        segment: { path: "segment_{segmentIndex}.ts" }
"#;

/// Test environment with an isolated working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Create a test environment with `treepath.yaml` holding the HLS layout.
    pub fn with_hls_layout() -> Self {
        let env = Self::new();
        env.write_file("treepath.yaml", HLS_YAML);
        env
    }

    /// Get a command builder running in this environment's directory.
    ///
    /// Environment variables that would change the outcome are cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("treepath").expect("Failed to find treepath binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("TREEPATH_LAYOUT")
            .env_remove("TREEPATH_MODE")
            .env_remove("TREEPATH_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory and return its path.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }
}
