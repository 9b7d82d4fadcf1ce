//! Resolves each field/attribute's type text through `cem-alias`'s
//! Type-Alias Resolver (§4.C), so a `type X = 'a' | 'b'` declared
//! locally or imported from another module shows up in the manifest as
//! its underlying union/literal form rather than the bare alias name.

use std::path::Path;

use cem_alias::{AliasResolver, SourceLoader};
use cem_model::{ClassDeclaration, Member};
use cem_query::QueryManager;

/// Wraps a caller-supplied loader so the module currently being
/// extracted resolves against its own in-memory source rather than
/// whatever copy is last saved to disk, mirroring
/// `css_link::StyleFileLoader`'s own "tests can supply an in-memory
/// graph instead of touching the filesystem" abstraction.
struct CurrentFileLoader<'a> {
    path: &'a Path,
    source: &'a str,
    inner: &'a dyn SourceLoader,
}

impl SourceLoader for CurrentFileLoader<'_> {
    fn read(&self, path: &Path) -> Option<String> {
        if path == self.path {
            Some(self.source.to_string())
        } else {
            self.inner.read(path)
        }
    }
}

/// Rewrites every field/attribute `type_text` on `class` in place,
/// following type aliases to their underlying form. A type text that
/// isn't a bare identifier, or that never resolves to a local `type`
/// declaration, is left untouched (§4.C: "unknown identifiers pass
/// through untouched").
pub fn resolve_aliases(manager: &QueryManager, module_file: &Path, source: &str, loader: &dyn SourceLoader, class: &mut ClassDeclaration) {
    let wrapped = CurrentFileLoader { path: module_file, source, inner: loader };
    let resolver = AliasResolver::new(manager, &wrapped);

    for member in &mut class.members {
        if let Member::Field(field) = member {
            resolve_one(&resolver, module_file, &mut field.type_text);
        }
    }
    for attribute in &mut class.attributes {
        resolve_one(&resolver, module_file, &mut attribute.type_text);
    }
}

fn resolve_one<L: SourceLoader>(resolver: &AliasResolver<'_, L>, file: &Path, type_text: &mut Option<String>) {
    let Some(name) = type_text.as_deref() else { return };
    if !cem_alias::is_bare_identifier(name) {
        return;
    }
    let resolved = resolver.resolve(file, name);
    if resolved.source_alias.is_some() {
        *type_text = Some(resolved.text);
    }
}

#[cfg(test)]
#[path = "tests/alias_link.rs"]
mod tests;
