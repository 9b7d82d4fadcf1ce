//! Intermediate, AST-shaped records produced by one pass over a single
//! module (§4.F), before the merger (§4.G) fuses them with JSDoc, CSS,
//! and HTML-template data into the canonical [`cem_model`] shape.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

#[derive(Debug, Clone, Default)]
pub struct RawParameter {
    pub name: String,
    pub type_text: Option<String>,
    pub optional: bool,
    pub rest: bool,
}

/// A `@property({…})` decorator's parsed options (§4.F reactive-property
/// inference). `None` fields mean the option was not written at all,
/// which is distinct from having been written as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyOptions {
    pub attribute_name: Option<String>,
    pub attribute_disabled: bool,
    pub reflects: bool,
    pub type_hint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RawField {
    pub name: String,
    pub is_static: bool,
    pub privacy: Privacy,
    pub readonly: bool,
    pub type_text: Option<String>,
    pub initializer: Option<String>,
    /// `Some` only for fields carrying a `@property(...)` decorator.
    pub property_options: Option<PropertyOptions>,
    /// True once a `set` accessor was also seen for the same name.
    pub writable: bool,
    pub start_byte: u32,
}

#[derive(Debug, Clone, Default)]
pub struct RawMethod {
    pub name: String,
    pub is_static: bool,
    pub privacy: Privacy,
    pub parameters: Vec<RawParameter>,
    pub return_type: Option<String>,
    pub start_byte: u32,
}

/// A component of a heritage clause: either the ultimate superclass or
/// one mixin application wrapping it, e.g. `Foo extends Mixin(Base)`
/// discovers `mixins = ["Mixin"]`, `superclass = "Base"`.
#[derive(Debug, Clone, Default)]
pub struct RawClass {
    pub name: String,
    /// Raw text of the preceding JSDoc block comment, if any (including
    /// `/** … */` delimiters — [`cem_jsdoc::parse`] strips those).
    pub doc_comment: Option<String>,
    pub superclass_name: Option<String>,
    pub mixin_names: Vec<String>,
    pub tag_name: Option<String>,
    pub fields: Vec<RawField>,
    pub methods: Vec<RawMethod>,
    pub is_exported: bool,
    pub is_default_export: bool,
    pub start_byte: u32,
}

#[derive(Debug, Clone)]
pub enum RawExport {
    Js {
        name: String,
    },
    CustomElementDefinition {
        tag_name: String,
        class_name: String,
        /// Set only when the referenced class was imported from another
        /// module rather than declared in this file.
        class_module: Option<String>,
    },
}

/// A `static styles = css\`…\`` or `import styles from "./x.css"`
/// binding discovered on a class (§4.F style-binding collection), so
/// §4.D's CSS custom-property records can be attached to the right
/// owning class.
#[derive(Debug, Clone)]
pub enum StyleBinding {
    TaggedTemplate { raw_css: String },
    ExternalFile { specifier: String },
}

#[derive(Debug, Clone, Default)]
pub struct ExtractedClass {
    pub raw: RawClass,
    pub styles: Vec<StyleBinding>,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractedModule {
    pub classes: Vec<ExtractedClass>,
    pub exports: Vec<RawExport>,
    /// This module's own import bindings, carried through so the merger
    /// can resolve superclass/mixin module specifiers without
    /// re-parsing the file.
    pub imports: rustc_hash::FxHashMap<String, crate::imports::ImportBinding>,
}
