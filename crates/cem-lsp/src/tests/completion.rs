use cem_common::DiagnosticSink;
use cem_registry::{Registry, RegistryConfig};
use tempfile::tempdir;

use super::*;

struct NoopFetcher;

#[async_trait::async_trait]
impl cem_registry::RemoteFetcher for NoopFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, cem_registry::RegistryError> {
        Err(cem_registry::RegistryError::RemoteFetch { url: url.to_string(), attempts: 1, message: "unused".to_string() })
    }
}

async fn registry_with_my_button() -> Registry {
    let dir = tempdir().unwrap();
    let json = r#"{"schemaVersion":"2.1.1","modules":[{"path":"my-button.js","kind":"javascript-module","declarations":[{"kind":"class","name":"MyButton","tagName":"my-button","attributes":[{"name":"label","fieldName":"label","type":"string"},{"name":"disabled","fieldName":"disabled","type":"boolean"}],"events":[{"name":"change"}]}],"exports":[]}]}"#;
    std::fs::write(dir.path().join("custom-elements.json"), json).unwrap();

    let mut registry = Registry::new();
    let fetcher = NoopFetcher;
    let mut sink = DiagnosticSink::new();
    registry.load_manifests(dir.path(), RegistryConfig::default(), &fetcher, &mut sink).await;
    registry
}

#[tokio::test]
async fn tag_name_context_lists_every_known_tag() {
    let registry = registry_with_my_button().await;
    let items = items_for(&CompletionContext::TagName, &registry);
    assert_eq!(items.iter().map(|i| i.label.as_str()).collect::<Vec<_>>(), vec!["my-button"]);
}

#[tokio::test]
async fn attr_name_context_lists_the_tags_attributes() {
    let registry = registry_with_my_button().await;
    let context = CompletionContext::AttrName { tag: "my-button".to_string() };
    let items = items_for(&context, &registry);
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["label", "disabled"]);
}

#[tokio::test]
async fn lit_boolean_context_only_lists_boolean_attributes() {
    let registry = registry_with_my_button().await;
    let context = CompletionContext::LitBoolean { tag: "my-button".to_string() };
    let items = items_for(&context, &registry);
    assert_eq!(items.iter().map(|i| i.label.as_str()).collect::<Vec<_>>(), vec!["disabled"]);
}

#[tokio::test]
async fn lit_event_context_lists_events() {
    let registry = registry_with_my_button().await;
    let context = CompletionContext::LitEvent { tag: "my-button".to_string() };
    let items = items_for(&context, &registry);
    assert_eq!(items.iter().map(|i| i.label.as_str()).collect::<Vec<_>>(), vec!["change"]);
}

#[tokio::test]
async fn none_context_yields_no_completions() {
    let registry = registry_with_my_button().await;
    assert!(items_for(&CompletionContext::None, &registry).is_empty());
}
