//! Hover (§4.K): resolves the same completion context at the cursor,
//! then renders whatever the registry knows about that tag or attribute.
//! `word` is the literal identifier under the cursor — the resolver's
//! `TagName`/`AttrName` variants mark the *position*, not the text.

use cem_registry::Registry;
use tower_lsp_server::ls_types::{Hover, HoverContents, MarkupContent, MarkupKind};

use crate::completion_context::CompletionContext;

#[must_use]
pub fn hover_for(context: &CompletionContext, word: &str, registry: &Registry) -> Option<Hover> {
    let markdown = match context {
        CompletionContext::TagName => {
            let (info, _) = registry.element_info(word)?;
            let mut text = format!("**<{word}>**");
            if let Some(desc) = &info.description {
                text.push_str("\n\n");
                text.push_str(desc);
            }
            text
        }
        CompletionContext::AttrName { tag } | CompletionContext::AttrValue { tag, .. } => {
            let attrs = registry.all_attributes_for(tag);
            let attr = attrs.iter().find(|a| a.name == word)?;
            let mut text = format!("**{word}** on `<{tag}>`");
            if let Some(desc) = &attr.description {
                text.push_str("\n\n");
                text.push_str(desc);
            }
            text
        }
        CompletionContext::LitEvent { tag } => format!("**@{word}** event binding on `<{tag}>`"),
        CompletionContext::LitProperty { tag } => format!("**.{word}** property binding on `<{tag}>`"),
        CompletionContext::LitBoolean { tag } => format!("**?{word}** boolean attribute binding on `<{tag}>`"),
        CompletionContext::None => return None,
    };

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent { kind: MarkupKind::Markdown, value: markdown }),
        range: None,
    })
}

#[cfg(test)]
#[path = "tests/hover.rs"]
mod tests;
