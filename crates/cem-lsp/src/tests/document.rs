use cem_query::QueryManager;

use super::*;

fn manager() -> QueryManager {
    QueryManager::new(&cem_html::queries::entries()).expect("html/ts queries compile")
}

#[test]
fn new_document_parses_and_builds_a_line_map() {
    let manager = manager();
    let doc = Document::new(&manager, "class A {}\nclass B {}".to_string(), 1, "typescript".to_string());
    assert!(doc.tree.is_some());
    assert_eq!(doc.line_map.line_count(), 2);
}

#[test]
fn replace_text_reparses_and_bumps_version() {
    let manager = manager();
    let mut doc = Document::new(&manager, "class A {}".to_string(), 1, "typescript".to_string());
    doc.replace_text(&manager, "class A {}\nclass B {}".to_string(), 2);
    assert_eq!(doc.version, 2);
    assert_eq!(doc.line_map.line_count(), 2);
}

#[test]
fn apply_change_splices_a_ranged_edit_instead_of_overwriting() {
    let manager = manager();
    let mut doc = Document::new(&manager, "class A {}\nclass B {}".to_string(), 1, "typescript".to_string());

    // Replace "A" on line 0 (columns 6..7) with "Renamed".
    let range = cem_common::Range::new(cem_common::Position::new(0, 6), cem_common::Position::new(0, 7));
    doc.apply_change(&manager, Some(range), "Renamed".to_string(), 2);

    assert_eq!(doc.text, "class Renamed {}\nclass B {}");
    assert_eq!(doc.version, 2);
    assert!(doc.tree.is_some());
}

#[test]
fn apply_change_with_no_range_falls_back_to_a_full_replacement() {
    let manager = manager();
    let mut doc = Document::new(&manager, "class A {}".to_string(), 1, "typescript".to_string());
    doc.apply_change(&manager, None, "class B {}".to_string(), 2);
    assert_eq!(doc.text, "class B {}");
    assert_eq!(doc.version, 2);
}

#[test]
fn word_at_offset_extracts_a_hyphenated_tag_name() {
    let manager = manager();
    let source = "<my-button></my-button>".to_string();
    let offset = source.find("my-button").unwrap() as u32 + 2;
    let doc = Document::new(&manager, source, 1, "html".to_string());
    assert_eq!(doc.word_at_offset(offset), "my-button");
}

#[test]
fn word_at_offset_strips_a_lit_sigil() {
    let manager = manager();
    let source = "<my-button @click=\"\"></my-button>".to_string();
    let offset = source.find("@click").unwrap() as u32 + 2;
    let doc = Document::new(&manager, source, 1, "html".to_string());
    assert_eq!(doc.word_at_offset(offset), "click");
}

#[test]
fn document_store_open_get_close_round_trips() {
    let manager = manager();
    let store = DocumentStore::new();
    let uri: tower_lsp_server::ls_types::Uri = "file:///a.html".parse().unwrap();
    store.open(&manager, uri.clone(), "<my-button></my-button>".to_string(), 1, "html".to_string());
    assert!(store.get(&uri).is_some());
    store.close(&uri);
    assert!(store.get(&uri).is_none());
}
