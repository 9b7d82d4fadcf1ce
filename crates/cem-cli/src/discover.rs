//! Finds the TypeScript/JavaScript source files `generate`/`health` walk,
//! honoring the config's `exclude`/`generate.include` globs (§6.1).

use std::path::{Path, PathBuf};

use cem_query::Grammar;
use globset::{Glob, GlobSet, GlobSetBuilder};

fn build_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().unwrap_or_else(|_| GlobSetBuilder::new().build().expect("empty globset always builds"))
}

/// Grammar for a source file by extension — the CLI's on-disk
/// equivalent of [`Grammar::from_language_id`] for the LSP's `languageId`.
#[must_use]
pub fn grammar_for_path(path: &Path) -> Option<Grammar> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Some(Grammar::TypeScript),
        Some("tsx") => Some(Grammar::Tsx),
        Some("js" | "mjs" | "cjs" | "jsx") => Some(Grammar::JavaScript),
        _ => None,
    }
}

/// Every `.ts`/`.tsx`/`.js` file under `root`, in lexicographic order
/// (§5: "across modules, order follows the workspace file walker's
/// lexicographic order for determinism"), minus `exclude` and
/// `node_modules`/`.git`, intersected with `include` when non-empty.
#[must_use]
pub fn discover_source_files(root: &Path, exclude: &[String], include: &[String]) -> Vec<PathBuf> {
    let exclude_set = build_set(exclude);
    let include_set = build_set(include);

    let mut entries: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.file_name() != "node_modules" && e.file_name() != ".git")
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|path| grammar_for_path(path).is_some())
        .filter(|path| {
            let relative = path.strip_prefix(root).unwrap_or(path);
            !exclude_set.is_match(relative)
        })
        .filter(|path| {
            if include.is_empty() {
                return true;
            }
            let relative = path.strip_prefix(root).unwrap_or(path);
            include_set.is_match(relative)
        })
        .collect();

    entries.sort();
    entries
}

#[cfg(test)]
#[path = "tests/discover.rs"]
mod tests;
