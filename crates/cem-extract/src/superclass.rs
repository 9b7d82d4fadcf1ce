//! Superclass/mixin module resolution (§4.F).

use rustc_hash::FxHashMap;

use crate::imports::ImportBinding;

/// Platform globals available without an import, whose manifest module
/// is the synthetic `"global:"` specifier rather than a real one.
const PLATFORM_GLOBALS: &[&str] = &[
    "HTMLElement",
    "HTMLButtonElement",
    "HTMLInputElement",
    "HTMLAnchorElement",
    "HTMLFormElement",
    "HTMLSelectElement",
    "HTMLTextAreaElement",
    "Element",
    "Node",
    "EventTarget",
    "Event",
    "CustomEvent",
    "Object",
    "Error",
];

/// Resolves a bare identifier referenced in a heritage clause (a
/// superclass or a mixin function) to its owning module, or `None` if
/// it's neither a known platform global nor an imported name (§4.F:
/// "Unresolvable → module omitted; emitter may issue a warning").
#[must_use]
pub fn resolve_module(name: &str, imports: &FxHashMap<String, ImportBinding>) -> Option<String> {
    if PLATFORM_GLOBALS.contains(&name) {
        return Some("global:".to_string());
    }
    imports.get(name).map(|binding| binding.specifier.clone())
}

#[cfg(test)]
#[path = "tests/superclass.rs"]
mod tests;
