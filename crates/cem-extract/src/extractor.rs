//! Ties class discovery, import scanning, and `customElements.define`
//! discovery together into one [`ExtractedModule`] per source file
//! (§4.F). Superclass/mixin module resolution and the JSDoc/CSS/HTML
//! fusion happen afterward in [`crate::merge`], since both need data
//! this pass doesn't have in scope (the import map is already carried
//! through; JSDoc/CSS/HTML results are separate crates' outputs).

use cem_query::{Grammar, QueryManager};

use crate::class_scan;
use crate::define_scan;
use crate::imports;
use crate::types::{ExtractedModule, RawExport};

#[must_use]
pub fn extract(manager: &QueryManager, grammar: Grammar, source: &str) -> ExtractedModule {
    let import_map = imports::scan_imports(manager, grammar, source);
    let classes = class_scan::discover_classes(manager, grammar, source, &import_map);
    let define_calls = define_scan::discover_define_calls(manager, grammar, source);

    let local_class_names: Vec<String> = classes.iter().map(|c| c.raw.name.clone()).collect();
    let mut exports: Vec<RawExport> = classes
        .iter()
        .filter(|c| c.raw.is_exported)
        .map(|c| RawExport::Js { name: c.raw.name.clone() })
        .collect();
    exports.extend(define_scan::resolve_define_exports(&define_calls, &local_class_names, &import_map));

    ExtractedModule {
        classes,
        exports,
        imports: import_map,
    }
}

#[cfg(test)]
#[path = "tests/extractor.rs"]
mod tests;
