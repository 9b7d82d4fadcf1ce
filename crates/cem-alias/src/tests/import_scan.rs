use cem_query::{Grammar, QueryManager};

use super::scan_imports;
use crate::queries;

fn manager() -> QueryManager {
    QueryManager::new(&queries::entries()).expect("import queries compile")
}

#[test]
fn finds_plain_named_import() {
    let manager = manager();
    let source = r#"import { Variant } from "./types";"#;
    let imports = scan_imports(&manager, Grammar::TypeScript, source);
    let binding = imports.get("Variant").expect("import found");
    assert_eq!(binding.specifier, "./types");
    assert_eq!(binding.imported_name, "Variant");
}

#[test]
fn finds_aliased_named_import() {
    let manager = manager();
    let source = r#"import { Variant as V } from "./types";"#;
    let imports = scan_imports(&manager, Grammar::TypeScript, source);
    let binding = imports.get("V").expect("aliased import found under local name");
    assert_eq!(binding.imported_name, "Variant");
}

#[test]
fn finds_multiple_specifiers_from_one_statement() {
    let manager = manager();
    let source = r#"import { A, B as C } from "./types";"#;
    let imports = scan_imports(&manager, Grammar::TypeScript, source);
    assert_eq!(imports["A"].imported_name, "A");
    assert_eq!(imports["C"].imported_name, "B");
}

#[test]
fn no_imports_returns_empty_map() {
    let manager = manager();
    let imports = scan_imports(&manager, Grammar::TypeScript, "const x = 1;\n");
    assert!(imports.is_empty());
}
