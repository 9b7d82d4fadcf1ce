use cem_query::{Grammar, QueryManager};

use super::extract;
use crate::queries;

fn manager() -> QueryManager {
    QueryManager::new(&queries::entries()).expect("queries compile")
}

#[test]
fn bare_default_slot_has_empty_name() {
    let manager = manager();
    let source = "render() { return html`<slot></slot>`; }\n";
    let result = extract(&manager, Grammar::TypeScript, source);
    assert_eq!(result.slots.len(), 1);
    assert_eq!(result.slots[0].name, "");
}

#[test]
fn named_slot_picks_up_preceding_short_comment() {
    let manager = manager();
    let source = "render() { return html`<!-- an icon --><slot name=\"icon\"></slot>`; }\n";
    let result = extract(&manager, Grammar::TypeScript, source);
    let slot = result.slots.iter().find(|s| s.name == "icon").expect("icon slot");
    assert_eq!(slot.description.as_deref(), Some("an icon"));
}

#[test]
fn part_attribute_is_recorded() {
    let manager = manager();
    let source = "render() { return html`<div part=\"base\"></div>`; }\n";
    let result = extract(&manager, Grammar::TypeScript, source);
    assert_eq!(result.parts[0].name, "base");
}

#[test]
fn composed_template_via_identifier_is_followed() {
    let manager = manager();
    let source = "\
const icon = html`<slot name=\"icon\"></slot>`;
render() { return html`<div>${icon}</div>`; }
";
    let result = extract(&manager, Grammar::TypeScript, source);
    assert!(result.slots.iter().any(|s| s.name == "icon"));
}

#[test]
fn duplicate_slot_merges_additively() {
    let manager = manager();
    let source = "\
render() {
  return html`<!-- summary: Icon --><slot name=\"icon\"></slot><slot name=\"icon\"></slot>`;
}
";
    let result = extract(&manager, Grammar::TypeScript, source);
    let icons: Vec<_> = result.slots.iter().filter(|s| s.name == "icon").collect();
    assert_eq!(icons.len(), 1);
    assert_eq!(icons[0].summary.as_deref(), Some("Icon"));
}

#[test]
fn untagged_innerhtml_assignment_is_scanned() {
    let manager = manager();
    let source = "this.shadowRoot.innerHTML = `<slot name=\"icon\"></slot>`;\n";
    let result = extract(&manager, Grammar::TypeScript, source);
    assert!(result.slots.iter().any(|s| s.name == "icon"));
}
