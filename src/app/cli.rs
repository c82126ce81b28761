//! CLI adapter.

use clap::Parser;

#[derive(Parser)]
#[command(name = "sdbox")]
#[command(version)]
#[command(
    about = "Set up a local instance of Screwdriver on the local system",
    long_about = None
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let _cli = Cli::parse();

    if let Err(e) = crate::bootstrap() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
