//! `cem lsp` (§6): runs the language server over stdio, identical to
//! running the standalone `cem-lsp` binary.

use cem_lsp::Backend;
use tower_lsp_server::{LspService, Server};

pub async fn run() -> anyhow::Result<()> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
    Ok(())
}
