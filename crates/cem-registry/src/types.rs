//! The registry's per-tag index record (§4.I).

use cem_model::{Attribute, CssCustomProperty, CssPart, CssState, Event, Slot};

/// Where an [`ElementInfo`] came from, used by the conflict policy
/// (§4.I: "local manifest wins; among additional packages, the first
/// listed wins").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Source {
    Local,
    Package { order: usize, specifier: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementInfo {
    pub name: String,
    pub module_path: String,
    pub package_specifier: Option<String>,
    pub description: Option<String>,
    pub attributes: Vec<Attribute>,
    pub slots: Vec<Slot>,
    pub events: Vec<Event>,
    pub css_properties: Vec<CssCustomProperty>,
    pub css_parts: Vec<CssPart>,
    pub css_states: Vec<CssState>,
}
