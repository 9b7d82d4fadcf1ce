//! The canonical manifest data model (§3). Every field that may be
//! absent in source is `Option` and skipped on serialization, so an
//! emitted manifest only ever carries the data that was actually
//! found.

use cem_common::Deprecated;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: &str = "2.1.1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(rename = "schemaVersion")]
    pub schema_version: String,
    pub modules: Vec<Module>,
}

impl Package {
    #[must_use]
    pub fn new(modules: Vec<Module>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            modules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Always forward-slash-separated, relative to the package root.
    pub path: String,
    /// Always `"javascript-module"`.
    pub kind: ModuleKind,
    pub declarations: Vec<Declaration>,
    pub exports: Vec<Export>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleKind {
    #[serde(rename = "javascript-module")]
    JavaScriptModule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Export {
    #[serde(rename = "js")]
    Js { name: String, declaration: DeclarationRef },
    #[serde(rename = "custom-element-definition")]
    CustomElementDefinition { name: String, declaration: DeclarationRef },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

/// `Class` and `CustomElement` share a single `"class"` tag value in the
/// real manifest schema; whether a given `ClassDeclaration` is a custom
/// element is determined by `tag_name.is_some()`, not by a distinct
/// variant (§3: "a class may appear without a tag name").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Declaration {
    #[serde(rename = "class")]
    Class(ClassDeclaration),
    #[serde(rename = "function")]
    Function(FunctionDeclaration),
    #[serde(rename = "variable")]
    Variable(VariableDeclaration),
    #[serde(rename = "mixin")]
    MixinFunction(MixinDeclaration),
}

impl Declaration {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Declaration::Class(c) => &c.name,
            Declaration::Function(f) => &f.name,
            Declaration::Variable(v) => &v.name,
            Declaration::MixinFunction(m) => &m.class.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Superclass {
    pub name: String,
    /// `"global:"` for platform types (e.g. `HTMLElement`), a package
    /// specifier, or a relative module path.
    pub module: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superclass: Option<Superclass>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<Superclass>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,

    // Populated only when this class is also a custom element (§3:
    // "non-empty tagName iff exported as a custom-element-definition").
    #[serde(rename = "tagName", skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Slot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    #[serde(rename = "cssProperties", skip_serializing_if = "Vec::is_empty")]
    pub css_properties: Vec<CssCustomProperty>,
    #[serde(rename = "cssParts", skip_serializing_if = "Vec::is_empty")]
    pub css_parts: Vec<CssPart>,
    #[serde(rename = "cssStates", skip_serializing_if = "Vec::is_empty")]
    pub css_states: Vec<CssState>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub demos: Vec<Demo>,
}

impl ClassDeclaration {
    #[must_use]
    pub fn is_custom_element(&self) -> bool {
        self.tag_name.is_some()
    }
}

/// `@customElement`/mixin-applying declarations that are functions
/// rather than classes (§3.2 doesn't distinguish these further; they
/// share `ClassDeclaration`'s shape in this manifest dialect).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MixinDeclaration {
    #[serde(flatten)]
    pub class: ClassDeclaration,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "return")]
    pub return_: Option<Return>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Member {
    #[serde(rename = "field")]
    Field(Field),
    #[serde(rename = "method")]
    Method(Method),
}

impl Member {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Member::Field(f) => &f.name,
            Member::Method(m) => &m.name,
        }
    }

    #[must_use]
    pub fn start_byte(&self) -> u32 {
        match self {
            Member::Field(f) => f.start_byte,
            Member::Method(m) => m.start_byte,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Public,
    Protected,
    Private,
}

impl Default for Privacy {
    fn default() -> Self {
        Privacy::Public
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "static", skip_serializing_if = "is_false")]
    pub is_static: bool,
    #[serde(skip_serializing_if = "is_public")]
    pub privacy: Privacy,
    #[serde(skip_serializing_if = "is_false")]
    pub readonly: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub reflects: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
    #[serde(skip)]
    pub start_byte: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(rename = "static", skip_serializing_if = "is_false")]
    pub is_static: bool,
    #[serde(skip_serializing_if = "is_public")]
    pub privacy: Privacy,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "return")]
    pub return_: Option<Return>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
    #[serde(skip)]
    pub start_byte: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub rest: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Return {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "fieldName", skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssCustomProperty {
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
    #[serde(skip)]
    pub start_byte: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssPart {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssState {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecated>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_public(p: &Privacy) -> bool {
    matches!(p, Privacy::Public)
}
