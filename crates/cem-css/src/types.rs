//! Records produced by the CSS extractor (§3, §4.D).

use cem_common::Deprecated;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CssCustomProperty {
    /// Always starts with `--`; `--_`-prefixed names never reach this
    /// struct (they're filtered before the map is returned).
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
    /// Byte offset of the declaration, used only for ordering; not part
    /// of the manifest's own JSON shape.
    #[serde(skip)]
    pub start_byte: u32,
}

impl CssCustomProperty {
    #[must_use]
    pub fn private(&self) -> bool {
        self.name.starts_with("--_")
    }
}

/// Output of one extraction pass: a name-keyed map (duplicate names
/// collapse to the last-seen record, per file) plus ordering info.
#[derive(Debug, Clone, Default)]
pub struct CssExtractResult {
    pub properties: Vec<CssCustomProperty>,
}

impl CssExtractResult {
    /// Sorts by `startByte`, ties broken by name (§4.D).
    pub fn sort(&mut self) {
        self.properties.sort_by(|a, b| a.start_byte.cmp(&b.start_byte).then_with(|| a.name.cmp(&b.name)));
    }
}
