//! A broken query is a programmer error: it is detected once at startup
//! (when the manager first compiles its embedded query set) and is
//! fatal, per §4.A and §7 (`QueryError`).

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("failed to compile query {name:?}: {source}")]
    Compile {
        name: &'static str,
        #[source]
        source: tree_sitter::QueryError,
    },
}
