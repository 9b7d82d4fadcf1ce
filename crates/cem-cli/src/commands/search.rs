//! `cem search <pattern>` (§6): tag names and descriptions containing
//! `pattern` (case-insensitive substring).

use std::path::Path;

use cem_common::DiagnosticSink;
use cem_registry::{HttpRemoteFetcher, Registry, RegistryConfig};

use crate::config::CemConfig;

pub async fn run(workspace_root: &Path, config: &CemConfig, pattern: &str) -> anyhow::Result<()> {
    let mut registry = Registry::new();
    let fetcher = HttpRemoteFetcher::new();
    let mut sink = DiagnosticSink::new();
    let registry_config = RegistryConfig { manifests: config.manifests.clone(), additional_packages: config.additional_packages.clone() };
    registry.load_manifests(workspace_root, registry_config, &fetcher, &mut sink).await;

    let needle = pattern.to_lowercase();
    for tag in registry.all_tag_names() {
        let (info, _) = match registry.element_info(tag) {
            Some(found) => found,
            None => continue,
        };
        let description = info.description.as_deref().unwrap_or("");
        if tag.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle) {
            println!("{tag}\t{description}");
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/search.rs"]
mod tests;
