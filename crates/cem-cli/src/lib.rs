//! The CLI front end (§6): `generate`/`list`/`search`/`health`/`validate`
//! over the registry, plus the `lsp`/`mcp`/`serve` process entry points.
//! Exit codes: `0` success, `1` diagnostics found in `health`/`validate`,
//! `2` fatal I/O or parse error, `3` invalid CLI usage.

pub mod args;
pub mod commands;
pub mod config;
pub mod discover;

use std::path::PathBuf;
use std::process::ExitCode;

use args::{Cli, Command};
use clap::Parser;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_DIAGNOSTICS_FOUND: u8 = 1;
pub const EXIT_FATAL: u8 = 2;
pub const EXIT_USAGE: u8 = 3;

/// Parses `argv`, dispatches to the matching subcommand, and maps the
/// outcome onto the CLI's exit-code contract (§6).
pub async fn run(args: impl IntoIterator<Item = String>) -> ExitCode {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    // `lsp` reserves stdout for the protocol, so its logging must go to
    // stderr the same way the standalone `cem-lsp` binary's does.
    match cli.command {
        Command::Lsp => cem_common::logging::init_json(),
        _ => cem_common::logging::init_text(),
    }

    let workspace_root = cli.workspace.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = match config::load(&workspace_root) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_FATAL);
        }
    };

    let outcome = match cli.command {
        Command::Generate { out } => commands::generate::run(&workspace_root, &config, out.as_deref()).map(|_| false),
        Command::List => commands::list::run(&workspace_root, &config).await.map(|()| false),
        Command::Search { pattern } => commands::search::run(&workspace_root, &config, &pattern).await.map(|()| false),
        Command::Health => commands::health::run(&workspace_root, &config),
        Command::Validate { manifest } => commands::validate::run(&manifest).map(|sink| !sink.as_slice().is_empty()),
        Command::Lsp => commands::lsp::run().await.map(|()| false),
        Command::Mcp => commands::mcp::run().map(|()| false),
        Command::Serve { port } => commands::serve::run(port).map(|()| false),
        Command::Version => {
            commands::version::run();
            Ok(false)
        }
    };

    match outcome {
        Ok(true) => ExitCode::from(EXIT_DIAGNOSTICS_FOUND),
        Ok(false) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

#[cfg(test)]
#[path = "tests/lib.rs"]
mod tests;
