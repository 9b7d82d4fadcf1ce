use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Custom Elements Manifest toolchain (§6 CLI surface).
#[derive(Parser, Debug)]
#[command(name = "cem", version, about = "Custom Elements Manifest toolchain")]
pub struct Cli {
    /// Workspace root to operate in. Defaults to the current directory.
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk the workspace and emit a `custom-elements.json` manifest.
    Generate {
        /// Write the manifest here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List every tag name the registry currently knows about.
    List,
    /// Search tag names and descriptions for a substring.
    Search {
        pattern: String,
    },
    /// Generate and report diagnostics without writing a manifest; exits 1 if any were found.
    Health,
    /// Parse a manifest file and report whether it round-trips cleanly.
    Validate {
        manifest: PathBuf,
    },
    /// Run the language server over stdio.
    Lsp,
    /// Run the Model Context Protocol server (external collaborator; thin shell).
    Mcp,
    /// Run the dev server with live reload (external collaborator; thin shell).
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Print the CLI version.
    Version,
}
