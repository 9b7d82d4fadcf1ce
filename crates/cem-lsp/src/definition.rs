//! Go to definition (§4.K): resolve the same context, look the tag up
//! in the registry, and point at its declaring module.

use std::path::Path;

use cem_registry::Registry;
use tower_lsp_server::ls_types::{Location, Position, Range, Uri};

use crate::completion_context::CompletionContext;

#[must_use]
pub fn definition_for(context: &CompletionContext, word: &str, registry: &Registry, workspace_root: &Path) -> Option<Location> {
    let tag = tag_of(context, word)?;
    let (info, _) = registry.element_info(tag)?;
    let path = workspace_root.join(&info.module_path);
    let uri = path_to_uri(&path)?;
    Some(Location {
        uri,
        range: Range { start: Position { line: 0, character: 0 }, end: Position { line: 0, character: 0 } },
    })
}

fn tag_of<'a>(context: &'a CompletionContext, word: &'a str) -> Option<&'a str> {
    match context {
        CompletionContext::TagName => Some(word),
        CompletionContext::AttrName { tag }
        | CompletionContext::AttrValue { tag, .. }
        | CompletionContext::LitEvent { tag }
        | CompletionContext::LitProperty { tag }
        | CompletionContext::LitBoolean { tag } => Some(tag),
        CompletionContext::None => None,
    }
}

fn path_to_uri(path: &Path) -> Option<Uri> {
    format!("file://{}", path.display()).parse().ok()
}

#[cfg(test)]
#[path = "tests/definition.rs"]
mod tests;
