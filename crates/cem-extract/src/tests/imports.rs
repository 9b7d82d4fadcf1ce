use cem_query::{Grammar, QueryManager};

use super::*;
use crate::queries;

fn manager() -> QueryManager {
    QueryManager::new(&queries::entries()).expect("extract queries compile")
}

#[test]
fn default_import_is_recorded_with_no_imported_name() {
    let manager = manager();
    let source = "import styles from './x.css';\n";
    let bindings = scan_imports(&manager, Grammar::TypeScript, source);
    let binding = bindings.get("styles").expect("styles binding found");
    assert_eq!(binding.specifier, "./x.css");
    assert_eq!(binding.imported_name, None);
}

#[test]
fn named_import_tracks_specifier_and_imported_name() {
    let manager = manager();
    let source = "import { LitElement } from 'lit';\n";
    let bindings = scan_imports(&manager, Grammar::TypeScript, source);
    let binding = bindings.get("LitElement").expect("binding found");
    assert_eq!(binding.specifier, "lit");
    assert_eq!(binding.imported_name.as_deref(), Some("LitElement"));
}

#[test]
fn renamed_named_import_is_keyed_by_local_alias() {
    let manager = manager();
    let source = "import { Foo as Bar } from './foo.js';\n";
    let bindings = scan_imports(&manager, Grammar::TypeScript, source);
    assert!(bindings.get("Foo").is_none());
    let binding = bindings.get("Bar").expect("local alias tracked");
    assert_eq!(binding.imported_name.as_deref(), Some("Foo"));
}
