//! Entry point for the `cem-lsp` binary: stdio transport, JSON logging
//! to stderr (stdout is reserved for the protocol).

use cem_lsp::Backend;
use tower_lsp_server::{LspService, Server};

#[tokio::main]
async fn main() {
    cem_common::logging::init_json();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
