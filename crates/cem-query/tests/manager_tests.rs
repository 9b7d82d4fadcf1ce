use cem_query::{Grammar, QueryManager};

const CLASS_NAME_QUERY: &str = r#"
(class_declaration name: (type_identifier) @name)
"#;

#[test]
fn compiles_and_runs_a_query_against_typescript() {
    let manager = QueryManager::new(&[(Grammar::TypeScript, "className", CLASS_NAME_QUERY)])
        .expect("query compiles");

    let mut parser = manager.get_parser(Grammar::TypeScript);
    let source = "class HelloWorld extends HTMLElement {}";
    let tree = parser.parse(source, None).expect("parses");
    drop(parser);

    let matcher = manager
        .get_matcher(Grammar::TypeScript, "className")
        .expect("matcher exists");
    let matches = matcher.all_matches(tree.root_node(), source);

    assert_eq!(matches.len(), 1);
    let captured = &matches[0]["name"][0];
    assert_eq!(captured.text(source), "HelloWorld");
}

#[test]
fn unregistered_query_name_returns_none() {
    let manager = QueryManager::new(&[(Grammar::TypeScript, "className", CLASS_NAME_QUERY)])
        .expect("query compiles");
    assert!(manager.get_matcher(Grammar::Css, "className").is_none());
}

#[test]
fn parser_pool_recycles_instances() {
    let manager = QueryManager::new(&[(Grammar::TypeScript, "className", CLASS_NAME_QUERY)])
        .expect("query compiles");
    {
        let mut parser = manager.get_parser(Grammar::TypeScript);
        let _ = parser.parse("class A {}", None);
    }
    // Second acquire should reuse the released parser rather than panic
    // on an unset language.
    let mut parser = manager.get_parser(Grammar::TypeScript);
    let tree = parser.parse("class B {}", None);
    assert!(tree.is_some());
}
