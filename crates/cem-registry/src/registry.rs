//! The registry itself (§4.I): a `tagName -> ElementInfo` index hydrated
//! from local manifests and additional packages, invalidated by path.

use std::path::{Path, PathBuf};

use cem_common::{Diagnostic, DiagnosticKind, DiagnosticSink, Span};
use cem_model::Package;
use rustc_hash::FxHashMap;

use crate::discovery;
use crate::error::RegistryError;
use crate::index;
use crate::package_spec::PackageSpec;
use crate::remote::RemoteFetcher;
use crate::types::{ElementInfo, Source};

#[derive(Debug, Default, Clone)]
pub struct RegistryConfig {
    /// Extra manifest paths beyond what `discover_local_manifests` finds.
    pub manifests: Vec<String>,
    /// `npm:`/`jsr:`/http(s) package specifiers, in priority order.
    pub additional_packages: Vec<String>,
}

struct Entry {
    info: ElementInfo,
    source: Source,
}

/// A manifest file actually loaded, so `Invalidate` knows which tags a
/// changed path used to own.
struct LoadedManifest {
    path: PathBuf,
    tag_names: Vec<String>,
}

#[derive(Default)]
pub struct Registry {
    by_tag: FxHashMap<String, Entry>,
    local_manifests: Vec<LoadedManifest>,
    workspace_root: PathBuf,
    config: RegistryConfig,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial hydrate; idempotent — calling it again simply re-reads
    /// every source and rebuilds the index from scratch.
    pub async fn load_manifests(
        &mut self,
        workspace_root: &Path,
        config: RegistryConfig,
        fetcher: &dyn RemoteFetcher,
        sink: &mut DiagnosticSink,
    ) {
        self.workspace_root = workspace_root.to_path_buf();
        self.config = config;
        self.by_tag.clear();
        self.local_manifests.clear();

        let mut manifest_paths = discovery::discover_local_manifests(workspace_root);
        for extra in &self.config.manifests {
            manifest_paths.push(workspace_root.join(extra));
        }
        manifest_paths.sort();
        manifest_paths.dedup();

        for path in manifest_paths {
            match load_local_manifest(&path) {
                Ok(package) => {
                    let elements = index::elements_from_package(&package, None);
                    let tag_names: Vec<String> = elements.iter().map(|e| e.name.clone()).collect();
                    for info in elements {
                        self.insert(info, Source::Local, sink);
                    }
                    self.local_manifests.push(LoadedManifest { path, tag_names });
                }
                Err(err) => sink.push(Diagnostic::new(
                    DiagnosticKind::IoError,
                    path.display().to_string(),
                    Span::dummy(),
                    err.to_string(),
                )),
            }
        }

        let specifiers = self.config.additional_packages.clone();
        for (order, specifier) in specifiers.iter().enumerate() {
            match load_package_manifest(specifier, fetcher).await {
                Ok(package) => {
                    for info in index::elements_from_package(&package, Some(specifier)) {
                        self.insert(info, Source::Package { order, specifier: specifier.clone() }, sink);
                    }
                }
                Err(err) => sink.push(Diagnostic::new(
                    DiagnosticKind::RemoteFetchError,
                    specifier.clone(),
                    Span::dummy(),
                    err.to_string(),
                )),
            }
        }
    }

    fn insert(&mut self, info: ElementInfo, source: Source, sink: &mut DiagnosticSink) {
        if let Some(existing) = self.by_tag.get(&info.name) {
            if !source_wins(&source, &existing.source) {
                sink.push(Diagnostic::warning(
                    DiagnosticKind::DuplicateTagName,
                    info.module_path.clone(),
                    Span::dummy(),
                    format!("tag name {:?} is already defined by a higher-priority source", info.name),
                ));
                return;
            }
        }
        self.by_tag.insert(info.name.clone(), Entry { info, source });
    }

    #[must_use]
    pub fn element_info(&self, tag_name: &str) -> Option<(&ElementInfo, bool)> {
        self.by_tag.get(tag_name).map(|e| (&e.info, true))
    }

    #[must_use]
    pub fn all_tag_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_tag.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn all_attributes_for(&self, tag_name: &str) -> Vec<&cem_model::Attribute> {
        self.by_tag.get(tag_name).map(|e| e.info.attributes.iter().collect()).unwrap_or_default()
    }

    /// Removes entries owned by any of `paths`, then re-hydrates those
    /// manifests (or the whole registry's additional packages, which
    /// aren't path-addressable).
    pub async fn invalidate(&mut self, paths: &[PathBuf], fetcher: &dyn RemoteFetcher, sink: &mut DiagnosticSink) {
        let affected: Vec<PathBuf> = self
            .local_manifests
            .iter()
            .filter(|m| paths.iter().any(|p| p == &m.path))
            .map(|m| m.path.clone())
            .collect();

        for path in &affected {
            if let Some(manifest) = self.local_manifests.iter().find(|m| &m.path == path) {
                for tag in &manifest.tag_names {
                    self.by_tag.remove(tag);
                }
            }
        }
        self.local_manifests.retain(|m| !affected.contains(&m.path));

        for path in affected {
            match load_local_manifest(&path) {
                Ok(package) => {
                    let elements = index::elements_from_package(&package, None);
                    let tag_names: Vec<String> = elements.iter().map(|e| e.name.clone()).collect();
                    for info in elements {
                        self.insert(info, Source::Local, sink);
                    }
                    self.local_manifests.push(LoadedManifest { path, tag_names });
                }
                Err(err) => sink.push(Diagnostic::new(
                    DiagnosticKind::IoError,
                    path.display().to_string(),
                    Span::dummy(),
                    err.to_string(),
                )),
            }
        }

        let _ = fetcher;
    }
}

/// Local-wins-over-package, and among packages the earlier-listed wins
/// (§4.I's conflict policy).
fn source_wins(candidate: &Source, existing: &Source) -> bool {
    match (candidate, existing) {
        (Source::Local, Source::Local) => true,
        (Source::Local, Source::Package { .. }) => true,
        (Source::Package { .. }, Source::Local) => false,
        (Source::Package { order: new, .. }, Source::Package { order: old, .. }) => new <= old,
    }
}

fn load_local_manifest(path: &Path) -> Result<Package, RegistryError> {
    let text = std::fs::read_to_string(path).map_err(|source| RegistryError::Io { path: path.display().to_string(), source })?;
    serde_json::from_str(&text).map_err(|source| RegistryError::Json { path: path.display().to_string(), source })
}

async fn load_package_manifest(specifier: &str, fetcher: &dyn RemoteFetcher) -> Result<Package, RegistryError> {
    let spec = PackageSpec::parse(specifier).ok_or_else(|| RegistryError::InvalidPackageSpec(specifier.to_string()))?;
    let package_root = package_root_url(&spec);
    let package_json_url = format!("{package_root}/package.json");
    let package_json_text = fetcher.fetch_text(&package_json_url).await?;
    let package_json: serde_json::Value =
        serde_json::from_str(&package_json_text).map_err(|source| RegistryError::Json { path: package_json_url.clone(), source })?;
    let manifest_rel = package_json.get("customElements").and_then(|v| v.as_str()).unwrap_or("custom-elements.json");
    let manifest_url = format!("{package_root}/{manifest_rel}");
    let manifest_text = fetcher.fetch_text(&manifest_url).await?;
    serde_json::from_str(&manifest_text).map_err(|source| RegistryError::Json { path: manifest_url, source })
}

fn package_root_url(spec: &PackageSpec) -> String {
    match spec {
        PackageSpec::Npm { name, version } => {
            let version = version.as_deref().unwrap_or("latest");
            format!("https://unpkg.com/{name}@{version}")
        }
        PackageSpec::Jsr { scope, name } => format!("https://jsr.io/{scope}/{name}"),
        PackageSpec::Url(url) => url.trim_end_matches('/').to_string(),
    }
}

#[cfg(test)]
#[path = "tests/registry.rs"]
mod tests;
