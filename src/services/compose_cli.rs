use std::process::Command;

use crate::domain::AppError;
use crate::ports::StackLauncher;

/// Drives `docker-compose` and the OS browser opener with inherited stdio,
/// so the tools' own progress output reaches the operator directly.
pub struct DockerComposeLauncher;

impl DockerComposeLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DockerComposeLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl StackLauncher for DockerComposeLauncher {
    fn pull_images(&self) -> Result<(), AppError> {
        Command::new("docker-compose").arg("pull").status()?;
        Ok(())
    }

    fn start_stack(&self, project: &str) -> Result<(), AppError> {
        Command::new("docker-compose").args(["-p", project, "up", "-d"]).status()?;
        Ok(())
    }

    fn open_browser(&self, url: &str) -> Result<(), AppError> {
        let opener = if cfg!(target_os = "macos") { "open" } else { "xdg-open" };
        Command::new(opener).arg(url).status()?;
        Ok(())
    }
}
