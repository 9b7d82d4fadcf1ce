//! Per-workspace config at `.config/cem.yaml` (§6.1). Every key is
//! optional; a missing file is not an error — it just means defaults.

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct GenerateSection {
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub include: Vec<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct SourceSection {
    #[serde(rename = "href-template")]
    pub href_template: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct CemConfig {
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub manifests: Vec<String>,
    #[serde(default, rename = "additionalPackages")]
    pub additional_packages: Vec<String>,
    #[serde(default)]
    pub source: SourceSection,
    #[serde(default)]
    pub generate: GenerateSection,
}

/// Loads `.config/cem.yaml` relative to `workspace_root`. A missing file
/// yields the all-defaults config; a present-but-unparsable file is
/// reported to the caller so the CLI can exit with the I/O error code.
pub fn load(workspace_root: &Path) -> anyhow::Result<CemConfig> {
    let path = workspace_root.join(".config").join("cem.yaml");
    if !path.exists() {
        return Ok(CemConfig::default());
    }
    let text = std::fs::read_to_string(&path).map_err(|err| anyhow::anyhow!("reading {}: {err}", path.display()))?;
    let config: CemConfig = serde_yaml::from_str(&text).map_err(|err| anyhow::anyhow!("parsing {}: {err}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
