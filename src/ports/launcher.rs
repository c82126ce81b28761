use crate::domain::AppError;

/// Drives the container orchestration CLI for the rendered stack.
///
/// Each method spawns one independent external process. Spawn failures are
/// errors; a tool's own non-zero exit is left to its output.
pub trait StackLauncher {
    /// Pull the service images.
    fn pull_images(&self) -> Result<(), AppError>;

    /// Start the stack detached under the given project name.
    fn start_stack(&self, project: &str) -> Result<(), AppError>;

    /// Open the operator's browser at the given URL.
    fn open_browser(&self, url: &str) -> Result<(), AppError>;
}
