mod compose_cli;
mod console_dialoguer;
pub mod network;
mod openssl;
pub mod prerequisites;

pub use compose_cli::DockerComposeLauncher;
pub use console_dialoguer::DialoguerConsole;
pub use openssl::OpensslKeySource;
