pub mod generate;
pub mod health;
pub mod list;
pub mod lsp;
pub mod mcp;
pub mod search;
pub mod serve;
pub mod validate;
pub mod version;

use cem_query::QueryManager;

/// The full query set every subcommand that touches source files needs
/// (§4.A-§4.H combined), the same set `cem-lsp`'s `Backend::new` builds.
pub fn query_manager() -> QueryManager {
    let mut entries = cem_extract::queries::entries();
    entries.extend(cem_css::queries::entries());
    entries.extend(cem_html::queries::entries());
    entries.extend(cem_alias::queries::entries());
    QueryManager::new(&entries).expect("cem-cli's query set compiles")
}
