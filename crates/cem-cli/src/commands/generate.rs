//! `cem generate` (§6): walks the workspace, extracts every module, and
//! merges the result into a single manifest `Package`.

use std::path::Path;

use cem_alias::FsSourceLoader;
use cem_common::DiagnosticSink;
use cem_extract::FsStyleFileLoader;
use cem_model::Package;
use cem_query::QueryManager;

use crate::config::CemConfig;
use crate::discover;

/// Builds the manifest for `workspace_root` and returns every
/// diagnostic accumulated along the way. Never fails outright — a file
/// that can't be read becomes an `IoError` diagnostic and is skipped,
/// matching the extractor's own non-fatal error policy (§7).
pub fn build_package(manager: &QueryManager, workspace_root: &Path, config: &CemConfig) -> (Package, DiagnosticSink) {
    let mut sink = DiagnosticSink::new();
    let files = discover::discover_source_files(workspace_root, &config.exclude, &config.generate.include);

    let mut modules = Vec::with_capacity(files.len());
    for path in files {
        let relative = path.strip_prefix(workspace_root).unwrap_or(&path).to_string_lossy().replace('\\', "/");
        let Some(grammar) = discover::grammar_for_path(&path) else { continue };
        let source = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                sink.push(cem_common::Diagnostic::new(
                    cem_common::DiagnosticKind::IoError,
                    relative,
                    cem_common::Span::dummy(),
                    err.to_string(),
                ));
                continue;
            }
        };
        let module_dir = path.parent().unwrap_or(workspace_root);
        let module =
            cem_extract::build_module(manager, &relative, module_dir, &path, grammar, &source, &FsStyleFileLoader, &FsSourceLoader, &mut sink);
        modules.push(module);
    }

    (Package::new(modules), sink)
}

/// Runs `build_package` and either prints or writes the manifest JSON.
pub fn run(workspace_root: &Path, config: &CemConfig, out: Option<&Path>) -> anyhow::Result<DiagnosticSink> {
    let manager = super::query_manager();
    let (package, sink) = build_package(&manager, workspace_root, config);
    let json = serde_json::to_string_pretty(&package)?;

    match out {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(sink)
}

#[cfg(test)]
#[path = "../tests/generate.rs"]
mod tests;
