//! `cem health` (§6): runs `generate` in memory, prints every
//! diagnostic, writes nothing. Exit code 1 if any diagnostic fired.

use std::path::Path;

use colored::Colorize;

use crate::commands::generate;
use crate::config::CemConfig;

pub fn run(workspace_root: &Path, config: &CemConfig) -> anyhow::Result<bool> {
    let manager = super::query_manager();
    let (_package, sink) = generate::build_package(&manager, workspace_root, config);
    let diagnostics = sink.as_slice();

    for diag in diagnostics {
        let prefix = match diag.category {
            cem_common::DiagnosticCategory::Error => "error".red().bold(),
            cem_common::DiagnosticCategory::Warning => "warning".yellow().bold(),
        };
        eprintln!("{prefix}: {} ({}): {}", diag.file, diag.kind, diag.message);
    }

    if diagnostics.is_empty() {
        println!("{}", "healthy".green());
    }

    Ok(!diagnostics.is_empty())
}

#[cfg(test)]
#[path = "../tests/health.rs"]
mod tests;
