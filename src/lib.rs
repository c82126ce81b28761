//! sdbox: set up a local Screwdriver instance with Docker Compose.
//!
//! One linear run: resolve the reachable host address, check external tool
//! prerequisites, generate JWT signing keys, walk the operator through SCM
//! OAuth registration, render `docker-compose.yml`, and optionally launch
//! the stack.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::AppContext;
use app::commands::bootstrap;
use services::{DialoguerConsole, DockerComposeLauncher, OpensslKeySource};

pub use app::commands::bootstrap::LaunchDecision;
pub use domain::AppError;

/// Run the full bootstrap pipeline against the real console and tools.
///
/// Writes `docker-compose.yml` into the current directory, overwriting any
/// existing file.
pub fn bootstrap() -> Result<LaunchDecision, AppError> {
    let host = services::network::resolve_host_address();
    println!("🎁   Boxing up Screwdriver");

    println!("👀   Checking prerequisites");
    services::prerequisites::check_all()?;

    let ctx = AppContext::new(
        DialoguerConsole::new(),
        OpensslKeySource::new(),
        DockerComposeLauncher::new(),
    );
    bootstrap::execute(&ctx, &host, Path::new(domain::compose::COMPOSE_FILE))
}
