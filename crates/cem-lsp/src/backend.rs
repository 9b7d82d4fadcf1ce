//! The `LanguageServer` implementation (§6 LSP surface): wires the
//! document model, completion-context resolver, and registry together
//! behind `tower-lsp-server`'s protocol handlers.

use std::path::PathBuf;

use cem_query::{Grammar, QueryManager};
use cem_registry::{HttpRemoteFetcher, Registry, RegistryConfig};
use tokio::sync::RwLock;
use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::ls_types::{
    CodeActionOrCommand, CodeActionParams, CodeActionResponse, CompletionParams, CompletionResponse, Diagnostic as LspDiagnostic,
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams, DocumentChanges, GotoDefinitionParams,
    GotoDefinitionResponse, Hover, HoverParams, InitializeParams, InitializeResult, InitializedParams, Location, MessageType,
    OneOf, OptionalVersionedTextDocumentIdentifier, Position, ReferenceParams, ServerInfo, TextDocumentEdit, TextEdit, Uri,
    WorkspaceEdit,
};
use tower_lsp_server::{Client, LanguageServer};
use tracing::{debug, info, warn};

use crate::capabilities;
use crate::completion;
use crate::completion_context::{self, CompletionContext};
use crate::definition;
use crate::diagnostics;
use crate::document::DocumentStore;
use crate::hover;
use crate::references;

pub struct Backend {
    client: Client,
    manager: QueryManager,
    documents: DocumentStore,
    registry: RwLock<Registry>,
    workspace_root: RwLock<PathBuf>,
}

impl Backend {
    #[must_use]
    pub fn new(client: Client) -> Self {
        let mut entries = cem_extract::queries::entries();
        entries.extend(cem_css::queries::entries());
        entries.extend(cem_html::queries::entries());
        entries.extend(cem_alias::queries::entries());
        let manager = QueryManager::new(&entries).expect("cem-lsp's query set compiles");
        Self {
            client,
            manager,
            documents: DocumentStore::new(),
            registry: RwLock::new(Registry::new()),
            workspace_root: RwLock::new(PathBuf::from(".")),
        }
    }

    async fn publish_diagnostics(&self, uri: &Uri) {
        let Some(document) = self.documents.get(uri) else { return };
        let registry = self.registry.read().await;
        let path = uri.path().as_str().to_string();
        let diags = diagnostics::analyze(&self.manager, &registry, &path, &document);
        drop(registry);
        self.client.publish_diagnostics(uri.clone(), diags, None).await;
    }

    fn resolve_context(&self, uri: &Uri, position: Position) -> Option<(CompletionContext, String)> {
        let document = self.documents.get(uri)?;
        let grammar = document.grammar?;
        let offset = document.position_to_offset(cem_common::Position::new(position.line, position.character))?;
        let context = completion_context::resolve(&self.manager, grammar, document.tree.as_ref(), &document.text, offset);
        let word = document.word_at_offset(offset);
        Some((context, word))
    }
}

#[tower_lsp_server::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("cem-lsp initializing");

        if let Some(root) = params.root_uri.as_ref().and_then(|u| u.path().as_str().parse::<PathBuf>().ok()) {
            *self.workspace_root.write().await = root;
        }

        let additional_packages = params
            .initialization_options
            .as_ref()
            .and_then(|opts| opts.get("additionalPackages"))
            .and_then(|v| serde_json::from_value::<Vec<String>>(v.clone()).ok())
            .unwrap_or_default();

        let root = self.workspace_root.read().await.clone();
        let fetcher = HttpRemoteFetcher::new();
        let mut sink = cem_common::DiagnosticSink::new();
        let config = RegistryConfig { manifests: Vec::new(), additional_packages };
        self.registry.write().await.load_manifests(&root, config, &fetcher, &mut sink).await;
        for diag in sink.into_vec() {
            warn!(message = %diag.message, "registry load diagnostic");
        }

        Ok(InitializeResult {
            capabilities: capabilities::server_capabilities(),
            server_info: Some(ServerInfo { name: "cem-lsp".to_string(), version: Some(env!("CARGO_PKG_VERSION").to_string()) }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client.log_message(MessageType::INFO, "cem-lsp ready").await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("cem-lsp shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        debug!(%uri, "document opened");
        self.documents.open(&self.manager, uri.clone(), params.text_document.text, params.text_document.version, params.text_document.language_id);
        self.publish_diagnostics(&uri).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        // Applied in order: each change's range is relative to the
        // document state left by the previous one (§6: INCREMENTAL sync).
        for change in params.content_changes {
            let range = change.range.map(|r| {
                cem_common::Range::new(
                    cem_common::Position::new(r.start.line, r.start.character),
                    cem_common::Position::new(r.end.line, r.end.character),
                )
            });
            self.documents.apply_change(&self.manager, &uri, range, change.text, version);
        }
        self.publish_diagnostics(&uri).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.documents.close(&uri);
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        let Some((context, _word)) = self.resolve_context(&uri, position) else { return Ok(None) };
        let registry = self.registry.read().await;
        let items = completion::items_for(&context, &registry);
        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(CompletionResponse::Array(items)))
        }
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some((context, word)) = self.resolve_context(&uri, position) else { return Ok(None) };
        let registry = self.registry.read().await;
        Ok(hover::hover_for(&context, &word, &registry))
    }

    async fn goto_definition(&self, params: GotoDefinitionParams) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some((context, word)) = self.resolve_context(&uri, position) else { return Ok(None) };
        let registry = self.registry.read().await;
        let root = self.workspace_root.read().await;
        Ok(definition::definition_for(&context, &word, &registry, &root).map(GotoDefinitionResponse::Scalar))
    }

    async fn references(&self, params: ReferenceParams) -> Result<Option<Vec<Location>>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        let Some((context, word)) = self.resolve_context(&uri, position) else { return Ok(None) };
        let tag = match &context {
            CompletionContext::TagName => word,
            CompletionContext::AttrName { tag }
            | CompletionContext::AttrValue { tag, .. }
            | CompletionContext::LitEvent { tag }
            | CompletionContext::LitProperty { tag }
            | CompletionContext::LitBoolean { tag } => tag.clone(),
            CompletionContext::None => return Ok(None),
        };
        let locations = references::references_for(&self.manager, &self.documents, &tag);
        if locations.is_empty() {
            Ok(None)
        } else {
            Ok(Some(locations))
        }
    }

    async fn code_action(&self, params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        let uri = params.text_document.uri;
        let mut actions = Vec::new();
        for diag in params.context.diagnostics {
            let Some(action) = quick_fix_for(&uri, &diag) else { continue };
            actions.push(CodeActionOrCommand::CodeAction(action));
        }
        if actions.is_empty() {
            Ok(None)
        } else {
            Ok(Some(actions))
        }
    }
}

/// Turns the "did you mean X?" text our own `unknown-attribute`
/// diagnostics carry into a quick-fix replacing the misspelled name.
fn quick_fix_for(uri: &Uri, diag: &LspDiagnostic) -> Option<tower_lsp_server::ls_types::CodeAction> {
    let (_, suggestion) = diag.message.rsplit_once("did you mean ")?;
    let suggestion = suggestion.trim_end_matches('?').trim_matches('"');

    let edit = TextEdit { range: diag.range, new_text: suggestion.to_string() };
    let changes = DocumentChanges::Edits(vec![TextDocumentEdit {
        text_document: OptionalVersionedTextDocumentIdentifier { uri: uri.clone(), version: None },
        edits: vec![OneOf::Left(edit)],
    }]);

    Some(tower_lsp_server::ls_types::CodeAction {
        title: format!("Replace with {suggestion:?}"),
        kind: Some(tower_lsp_server::ls_types::CodeActionKind::QUICKFIX),
        diagnostics: Some(vec![diag.clone()]),
        edit: Some(WorkspaceEdit { changes: None, document_changes: Some(changes), change_annotations: None }),
        ..Default::default()
    })
}

#[cfg(test)]
#[path = "tests/backend.rs"]
mod tests;
