//! `cem validate <manifest>` (§6): parses a manifest file and reports
//! structural problems — malformed JSON is fatal (exit 2), duplicate
//! tag names are a diagnostic (exit 1).

use std::path::Path;

use cem_common::{Diagnostic, DiagnosticKind, DiagnosticSink, Span};
use cem_model::Package;
use colored::Colorize;
use rustc_hash::FxHashSet;

pub fn run(manifest_path: &Path) -> anyhow::Result<DiagnosticSink> {
    let text = std::fs::read_to_string(manifest_path)?;
    let package: Package = serde_json::from_str(&text)?;

    let mut sink = DiagnosticSink::new();
    let mut seen_tags = FxHashSet::default();

    for module in &package.modules {
        for declaration in &module.declarations {
            let cem_model::Declaration::Class(class) = declaration else { continue };
            let Some(tag) = &class.tag_name else { continue };
            if !seen_tags.insert(tag.clone()) {
                sink.push(Diagnostic::warning(
                    DiagnosticKind::DuplicateTagName,
                    module.path.clone(),
                    Span::dummy(),
                    format!("tag name {tag:?} is declared more than once in this manifest"),
                ));
            }
        }
    }

    for diag in sink.as_slice() {
        eprintln!("{}: {} ({}): {}", "warning".yellow().bold(), diag.file, diag.kind, diag.message);
    }
    if sink.as_slice().is_empty() {
        println!("{}", "valid".green());
    }

    Ok(sink)
}

#[cfg(test)]
#[path = "../tests/validate.rs"]
mod tests;
