use cem_query::{Grammar, QueryManager};

use super::scan_aliases;
use crate::queries;

fn manager() -> QueryManager {
    QueryManager::new(&queries::entries()).expect("alias queries compile")
}

#[test]
fn finds_simple_alias() {
    let manager = manager();
    let source = r#"type Variant = "primary" | "secondary";"#;
    let aliases = scan_aliases(&manager, Grammar::TypeScript, source);
    let decl = aliases.get("Variant").expect("alias found");
    assert_eq!(decl.value_text, r#""primary" | "secondary""#);
}

#[test]
fn finds_multiple_aliases_in_one_file() {
    let manager = manager();
    let source = "type A = string;\ntype B = number;\n";
    let aliases = scan_aliases(&manager, Grammar::TypeScript, source);
    assert_eq!(aliases.len(), 2);
    assert_eq!(aliases["A"].value_text, "string");
    assert_eq!(aliases["B"].value_text, "number");
}

#[test]
fn later_declaration_of_same_name_wins() {
    let manager = manager();
    let source = "type A = string;\ntype A = number;\n";
    let aliases = scan_aliases(&manager, Grammar::TypeScript, source);
    assert_eq!(aliases["A"].value_text, "number");
}

#[test]
fn no_aliases_returns_empty_map() {
    let manager = manager();
    let aliases = scan_aliases(&manager, Grammar::TypeScript, "const x = 1;\n");
    assert!(aliases.is_empty());
}
