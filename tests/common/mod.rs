//! Shared testing utilities for sdbox CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI
/// exercises, plus fabricated PATH directories to control which external
/// tools the binary can see.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Directory the binary runs in; the descriptor would be written here.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `sdbox` binary inside the
    /// work directory, with the host environment's engine endpoint cleared.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sdbox").expect("Failed to locate sdbox binary");
        cmd.current_dir(&self.work_dir).env_remove("DOCKER_HOST");
        cmd
    }

    /// An empty directory suitable as a PATH with no tools on it.
    pub fn empty_path_dir(&self) -> PathBuf {
        let dir = self.root.path().join("empty-path");
        fs::create_dir_all(&dir).expect("Failed to create empty PATH directory");
        dir
    }

    /// A directory containing executable stubs for the named tools.
    #[cfg(unix)]
    pub fn stub_path_dir(&self, tools: &[&str]) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let dir = self.root.path().join("stub-path");
        fs::create_dir_all(&dir).expect("Failed to create stub PATH directory");
        for tool in tools {
            let path = dir.join(tool);
            fs::write(&path, "#!/bin/sh\n").expect("Failed to write tool stub");
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to mark tool stub executable");
        }
        dir
    }

    /// Assert that no descriptor was written to the work directory.
    pub fn assert_no_descriptor(&self) {
        assert!(
            !self.work_dir.join("docker-compose.yml").exists(),
            "docker-compose.yml should not have been written"
        );
    }
}
