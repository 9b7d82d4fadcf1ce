//! Global logging setup, called exactly once by each binary entry point.
//!
//! Library crates never call these functions; they only emit `tracing`
//! events. `cem-cli`'s `generate`/`lsp`/`serve` subcommands and the
//! `cem-lsp` binary each call [`init_text`] or [`init_json`] at startup.

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Human-readable logging for interactive CLI usage.
pub fn init_text() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init();
}

/// Line-delimited JSON logging, used by the LSP (stdout is reserved for
/// the protocol, so this writes to stderr) and `cem serve`.
pub fn init_json() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
