//! Manifest Builder (§4.H): assembles a canonical [`Package`] from
//! already-merged modules, applying the ordering invariants §3
//! demands and excluding anything that shouldn't have survived merge.

use crate::types::{ClassDeclaration, Declaration, Member, Module, Package};

/// Builds the final `Package`, sorting modules by path for a
/// deterministic, diffable manifest across runs.
#[must_use]
pub fn build(mut modules: Vec<Module>) -> Package {
    for module in &mut modules {
        for declaration in &mut module.declarations {
            finalize_declaration(declaration);
        }
    }
    modules.sort_by(|a, b| a.path.cmp(&b.path));
    Package::new(modules)
}

fn finalize_declaration(declaration: &mut Declaration) {
    if let Declaration::Class(class) = declaration {
        finalize_class(class);
    }
}

fn finalize_class(class: &mut ClassDeclaration) {
    class.css_properties.retain(|p| !p.name.starts_with("--_"));
    class.css_properties.sort_by(|a, b| a.start_byte.cmp(&b.start_byte).then_with(|| a.name.cmp(&b.name)));
    class.members.sort_by_key(Member::start_byte);
    class.attributes.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
#[path = "tests/builder.rs"]
mod tests;
