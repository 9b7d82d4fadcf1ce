//! Structured output of the JSDoc parser (§4.B).

use cem_common::Deprecated;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrTag {
    pub name: String,
    pub type_text: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTag {
    /// `""` means the default slot (bare `@slot`).
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssPartTag {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssPropTag {
    pub name: String,
    pub syntax: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssStateTag {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTag {
    pub name: String,
    pub type_text: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamTag {
    pub name: Option<String>,
    pub type_text: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnsTag {
    pub type_text: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoTag {
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsdocError {
    pub tag: String,
    pub message: String,
}

/// Everything extracted from a single JSDoc block comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsDoc {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub deprecated: Option<Deprecated>,
    pub alias: Option<String>,
    /// Rendered `<figure>`/`<figcaption>` example blocks, in order,
    /// already concatenated per §4.B's multi-`@example` rule.
    pub example: Option<String>,
    pub attrs: Vec<AttrTag>,
    pub slots: Vec<SlotTag>,
    pub css_parts: Vec<CssPartTag>,
    pub css_props: Vec<CssPropTag>,
    pub css_states: Vec<CssStateTag>,
    pub fires: Vec<EventTag>,
    pub params: Vec<ParamTag>,
    pub returns: Option<ReturnsTag>,
    pub type_text: Option<String>,
    pub demos: Vec<DemoTag>,
    pub errors: Vec<JsdocError>,
}
