//! Turns a resolved [`CompletionContext`] into concrete `CompletionItem`s
//! by consulting the registry (§4.K: "Hover / definition / references
//! share the same resolver, then consult the registry").

use cem_registry::Registry;
use tower_lsp_server::ls_types::{CompletionItem, CompletionItemKind};

use crate::completion_context::CompletionContext;

#[must_use]
pub fn items_for(context: &CompletionContext, registry: &Registry) -> Vec<CompletionItem> {
    match context {
        CompletionContext::TagName => registry
            .all_tag_names()
            .into_iter()
            .map(|tag| simple_item(tag, CompletionItemKind::CLASS))
            .collect(),
        CompletionContext::AttrName { tag } => {
            registry.all_attributes_for(tag).into_iter().map(|a| simple_item(&a.name, CompletionItemKind::FIELD)).collect()
        }
        CompletionContext::AttrValue { .. } => Vec::new(),
        CompletionContext::LitEvent { tag } => registry
            .element_info(tag)
            .map(|(info, _)| info.events.iter().map(|e| simple_item(&e.name, CompletionItemKind::EVENT)).collect())
            .unwrap_or_default(),
        CompletionContext::LitProperty { tag } => registry
            .all_attributes_for(tag)
            .into_iter()
            .map(|a| simple_item(a.field_name.as_deref().unwrap_or(&a.name), CompletionItemKind::PROPERTY))
            .collect(),
        CompletionContext::LitBoolean { tag } => registry
            .all_attributes_for(tag)
            .into_iter()
            // Matches both an explicit TS `boolean` annotation and the
            // decorator type-fallback's literal `Boolean` constructor name.
            .filter(|a| a.type_text.as_deref().is_some_and(|t| t.eq_ignore_ascii_case("boolean")))
            .map(|a| simple_item(&a.name, CompletionItemKind::FIELD))
            .collect(),
        CompletionContext::None => Vec::new(),
    }
}

fn simple_item(label: &str, kind: CompletionItemKind) -> CompletionItem {
    CompletionItem { label: label.to_string(), kind: Some(kind), ..CompletionItem::default() }
}

#[cfg(test)]
#[path = "tests/completion.rs"]
mod tests;
