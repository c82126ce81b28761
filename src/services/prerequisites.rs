//! Upfront checks for the external tools the bootstrap shells out to.

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

const REQUIRED_TOOLS: [&str; 3] = ["docker", "docker-compose", "openssl"];

/// Verify every required external tool is on the search path.
///
/// Runs before any side effect so a missing tool aborts with a remediation
/// message instead of a mid-pipeline failure.
pub fn check_all() -> Result<(), AppError> {
    for tool in REQUIRED_TOOLS {
        if find_on_path(tool).is_none() {
            return Err(AppError::MissingPrerequisite(tool.to_string()));
        }
    }
    Ok(())
}

/// Locate an executable on the current PATH.
pub(crate) fn find_on_path(program: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
