//! Finds local manifest files under a workspace root (§4.I): every
//! `custom-elements.json`, plus whatever each `package.json`'s
//! `customElements` field points at.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(rename = "customElements")]
    custom_elements: Option<String>,
}

/// Every `.json` manifest this workspace owns, in the workspace file
/// walker's lexicographic order (§5: "across modules, order follows
/// the workspace file walker's lexicographic order for determinism").
#[must_use]
pub fn discover_local_manifests(workspace_root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut entries: Vec<_> = WalkDir::new(workspace_root)
        .into_iter()
        .filter_entry(|e| e.file_name() != "node_modules" && e.file_name() != ".git")
        .filter_map(Result::ok)
        .collect();
    entries.sort_by(|a, b| a.path().cmp(b.path()));

    for entry in entries {
        let path = entry.path();
        match path.file_name().and_then(|n| n.to_str()) {
            Some("custom-elements.json") => found.push(path.to_path_buf()),
            Some("package.json") => {
                if let Some(manifest) = manifest_from_package_json(path) {
                    found.push(manifest);
                }
            }
            _ => {}
        }
    }

    found.sort();
    found.dedup();
    found
}

fn manifest_from_package_json(package_json_path: &Path) -> Option<PathBuf> {
    let text = std::fs::read_to_string(package_json_path).ok()?;
    let package: PackageJson = serde_json::from_str(&text).ok()?;
    let custom_elements = package.custom_elements?;
    Some(package_json_path.parent()?.join(custom_elements))
}

#[cfg(test)]
#[path = "tests/discovery.rs"]
mod tests;
