//! `cem`: the CLI front end's process entry point.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    cem_cli::run(std::env::args()).await
}
