//! Records produced by the HTML-in-template extractor (§4.E).

use cem_common::Deprecated;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HtmlSlot {
    /// `""` is the default slot.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HtmlPart {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
}

impl HtmlSlot {
    /// Merges a later-seen duplicate into this one: the earlier entry
    /// keeps its identity, the later one only fills empty fields
    /// (§4.E: "metadata merges with the later one being additive only
    /// for empty fields").
    pub fn merge_additive(&mut self, later: HtmlSlot) {
        self.summary = self.summary.take().or(later.summary);
        self.description = self.description.take().or(later.description);
        self.deprecated = self.deprecated.take().or(later.deprecated);
    }
}

impl HtmlPart {
    pub fn merge_additive(&mut self, later: HtmlPart) {
        self.summary = self.summary.take().or(later.summary);
        self.description = self.description.take().or(later.description);
        self.deprecated = self.deprecated.take().or(later.deprecated);
    }
}

#[derive(Debug, Clone, Default)]
pub struct HtmlExtractResult {
    pub slots: Vec<HtmlSlot>,
    pub parts: Vec<HtmlPart>,
}
