use cem_query::QueryManager;

use super::*;
use crate::document::DocumentStore;

fn manager() -> QueryManager {
    QueryManager::new(&cem_html::queries::entries()).expect("html/ts queries compile")
}

#[test]
fn references_are_found_across_every_open_document() {
    let manager = manager();
    let store = DocumentStore::new();
    let one: tower_lsp_server::ls_types::Uri = "file:///one.html".parse().unwrap();
    let two: tower_lsp_server::ls_types::Uri = "file:///two.html".parse().unwrap();
    store.open(&manager, one.clone(), "<my-button></my-button>".to_string(), 1, "html".to_string());
    store.open(&manager, two.clone(), "<span></span><my-button></my-button>".to_string(), 1, "html".to_string());

    let locations = references_for(&manager, &store, "my-button");
    assert_eq!(locations.len(), 2);
}

#[test]
fn references_ignore_unrelated_tags() {
    let manager = manager();
    let store = DocumentStore::new();
    let uri: tower_lsp_server::ls_types::Uri = "file:///one.html".parse().unwrap();
    store.open(&manager, uri, "<my-button></my-button>".to_string(), 1, "html".to_string());

    assert!(references_for(&manager, &store, "your-widget").is_empty());
}

#[test]
fn closed_documents_are_not_searched() {
    let manager = manager();
    let store = DocumentStore::new();
    let uri: tower_lsp_server::ls_types::Uri = "file:///one.html".parse().unwrap();
    store.open(&manager, uri.clone(), "<my-button></my-button>".to_string(), 1, "html".to_string());
    store.close(&uri);

    assert!(references_for(&manager, &store, "my-button").is_empty());
}
