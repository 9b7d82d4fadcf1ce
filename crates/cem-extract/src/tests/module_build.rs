use std::path::Path;

use cem_common::DiagnosticSink;
use cem_model::{Declaration, Export};
use cem_query::{Grammar, QueryManager};

use super::*;
use crate::css_link::{FsStyleFileLoader, StyleFileLoader};
use crate::queries;

fn manager() -> QueryManager {
    let mut entries = queries::entries();
    entries.extend(cem_css::queries::entries());
    entries.extend(cem_html::queries::entries());
    entries.extend(cem_alias::queries::entries());
    QueryManager::new(&entries).expect("combined queries compile")
}

const SOURCE: &str = r#"
import { LitElement, html, css } from 'lit';
import { property, customElement } from 'lit/decorators.js';

/**
 * A friendly greeting button.
 *
 * @slot icon - Leading icon slot.
 * @csspart label - The label part.
 */
@customElement('my-button')
class MyButton extends LitElement {
  static styles = css`
    :host { display: block; }
    --my-button-color: blue;
  `;

  @property({ attribute: 'label-text' })
  labelText = 'Go';

  render() {
    return html`<slot name="icon"></slot><span part="label">${this.labelText}</span>`;
  }
}

customElements.define('my-button', MyButton);
"#;

#[test]
fn end_to_end_module_build_produces_a_custom_element_class_with_merged_records() {
    let manager = manager();
    let mut sink = DiagnosticSink::new();
    let loader: &dyn StyleFileLoader = &FsStyleFileLoader;
    let alias_loader = cem_alias::MapSourceLoader::new();
    let module = build_module(
        &manager,
        "my-button.ts",
        Path::new("/src"),
        Path::new("/src/my-button.ts"),
        Grammar::TypeScript,
        SOURCE,
        loader,
        &alias_loader,
        &mut sink,
    );

    assert_eq!(module.path, "my-button.ts");

    let class = module
        .declarations
        .iter()
        .find_map(|d| match d {
            Declaration::Class(c) if c.name == "MyButton" => Some(c),
            _ => None,
        })
        .expect("MyButton class declaration present");

    assert_eq!(class.tag_name.as_deref(), Some("my-button"));
    assert!(class.description.as_deref().unwrap().contains("friendly greeting button"));
    assert!(class.attributes.iter().any(|a| a.name == "label-text"));
    assert!(class.slots.iter().any(|s| s.name == "icon"));
    assert!(class.css_parts.iter().any(|p| p.name == "label"));
    assert!(class.css_properties.iter().any(|p| p.name == "--my-button-color"));

    assert!(module.exports.iter().any(|e| matches!(e, Export::CustomElementDefinition { name, .. } if name == "my-button")));
}
