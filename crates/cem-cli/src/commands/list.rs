//! `cem list` (§6): every tag name the registry can see, hydrated from
//! local manifests and `additionalPackages`.

use std::path::Path;

use cem_common::DiagnosticSink;
use cem_registry::{HttpRemoteFetcher, Registry, RegistryConfig};

use crate::config::CemConfig;

pub async fn run(workspace_root: &Path, config: &CemConfig) -> anyhow::Result<()> {
    let mut registry = Registry::new();
    let fetcher = HttpRemoteFetcher::new();
    let mut sink = DiagnosticSink::new();
    let registry_config = RegistryConfig { manifests: config.manifests.clone(), additional_packages: config.additional_packages.clone() };
    registry.load_manifests(workspace_root, registry_config, &fetcher, &mut sink).await;

    for tag in registry.all_tag_names() {
        println!("{tag}");
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/list.rs"]
mod tests;
