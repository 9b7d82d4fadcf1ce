//! Top-level per-module entry point: runs class/field/export discovery
//! (§4.F), resolves superclass/mixin modules, pulls in CSS and
//! HTML-template records, and merges (§4.G) everything into a
//! [`cem_model::Module`].
//!
//! One HTML-template extraction result is shared across every custom
//! element declared in a module — a scope decision documented in the
//! grounding ledger, since §4.E's extractor doesn't itself attribute
//! slots/parts to a particular class and most modules declare exactly
//! one custom element per file.

use std::path::Path;

use cem_alias::SourceLoader;
use cem_common::{Diagnostic, DiagnosticKind, DiagnosticSink, Span};
use cem_model::{Declaration, DeclarationRef, Export, Module, ModuleKind, Superclass};
use cem_query::{Grammar, QueryManager};
use rustc_hash::FxHashMap;

use crate::alias_link;
use crate::css_link::{self, StyleFileLoader};
use crate::extractor;
use crate::merge;
use crate::superclass;
use crate::types::RawExport;

/// `module_dir` resolves `ExternalFile` style specifiers; `module_file`
/// is the module's own path, the starting point for type-alias
/// resolution (§4.C) — distinct from `module_dir` since the latter is
/// only ever used as a join base, never read from directly.
#[must_use]
pub fn build_module(
    manager: &QueryManager,
    module_path: &str,
    module_dir: &Path,
    module_file: &Path,
    grammar: Grammar,
    source: &str,
    style_loader: &dyn StyleFileLoader,
    alias_loader: &dyn SourceLoader,
    sink: &mut DiagnosticSink,
) -> Module {
    let extracted = extractor::extract(manager, grammar, source);
    let html_result = cem_html::extract(manager, grammar, source);

    let tag_name_by_class: FxHashMap<&str, &str> = extracted
        .exports
        .iter()
        .filter_map(|e| match e {
            RawExport::CustomElementDefinition { tag_name, class_name, class_module: None } => Some((class_name.as_str(), tag_name.as_str())),
            _ => None,
        })
        .collect();

    let mut declarations = Vec::with_capacity(extracted.classes.len());

    for class in &extracted.classes {
        let jsdoc = class.raw.doc_comment.as_deref().map(cem_jsdoc::parse);
        let tag_name = class
            .raw
            .tag_name
            .clone()
            .or_else(|| tag_name_by_class.get(class.raw.name.as_str()).map(|t| t.to_string()));

        let superclass = class.raw.superclass_name.as_ref().and_then(|name| match superclass::resolve_module(name, &extracted.imports) {
            Some(module) => Some(Superclass { name: name.clone(), module }),
            None => {
                sink.push(Diagnostic::warning(
                    DiagnosticKind::MissingSuperclassModule,
                    module_path,
                    Span::at(class.raw.start_byte),
                    format!("could not resolve module for superclass {name:?}"),
                ));
                None
            }
        });

        let mixins = class
            .raw
            .mixin_names
            .iter()
            .filter_map(|name| {
                superclass::resolve_module(name, &extracted.imports).map(|module| Superclass { name: name.clone(), module })
            })
            .collect();

        let css_result = css_link::resolve_css_for_class(manager, module_dir, class, style_loader, sink);

        let mut class_decl = merge::merge_class(&class.raw, jsdoc.as_ref(), tag_name, superclass, mixins, &css_result, &html_result);
        alias_link::resolve_aliases(manager, module_file, source, alias_loader, &mut class_decl);
        declarations.push(Declaration::Class(class_decl));
    }

    let exports = extracted
        .exports
        .iter()
        .map(|export| match export {
            RawExport::Js { name } => Export::Js {
                name: name.clone(),
                declaration: DeclarationRef { name: name.clone(), module: None },
            },
            RawExport::CustomElementDefinition { tag_name, class_name, class_module } => Export::CustomElementDefinition {
                name: tag_name.clone(),
                declaration: DeclarationRef { name: class_name.clone(), module: class_module.clone() },
            },
        })
        .collect();

    Module {
        path: module_path.to_string(),
        kind: ModuleKind::JavaScriptModule,
        declarations,
        exports,
    }
}

#[cfg(test)]
#[path = "tests/module_build.rs"]
mod tests;
