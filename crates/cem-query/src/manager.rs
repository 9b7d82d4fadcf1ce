//! Owns compiled tree-sitter query objects per `(grammar, queryName)` and
//! lends pooled parser instances (§4.A).
//!
//! Compiled queries are immutable and `Arc`-shared across threads;
//! parsers are stateful (`Parser::parse` mutates internal buffers) and
//! are therefore checked out/in through a pool guarded by a mutex, the
//! same shape `tsz`'s module processors use for their scanner/parser
//! instances.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tree_sitter::{Parser, Query};

use crate::error::QueryError;
use crate::grammar::Grammar;
use crate::matcher::Matcher;

struct ParserPool {
    grammar: Grammar,
    idle: Mutex<Vec<Parser>>,
}

impl ParserPool {
    fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            idle: Mutex::new(Vec::new()),
        }
    }

    fn acquire(&self) -> Parser {
        if let Some(parser) = self.idle.lock().pop() {
            return parser;
        }
        let mut parser = Parser::new();
        parser
            .set_language(&self.grammar.language())
            .expect("grammar language version is compatible with this tree-sitter build");
        parser
    }

    fn release(&self, parser: Parser) {
        self.idle.lock().push(parser);
    }
}

/// A parser checked out of the pool; returned automatically on drop so a
/// parse is always paired with a release on every exit path (§5).
pub struct PooledParser<'a> {
    parser: Option<Parser>,
    pool: &'a ParserPool,
}

impl<'a> std::ops::Deref for PooledParser<'a> {
    type Target = Parser;
    fn deref(&self) -> &Parser {
        self.parser.as_ref().expect("parser taken only on drop")
    }
}

impl<'a> std::ops::DerefMut for PooledParser<'a> {
    fn deref_mut(&mut self) -> &mut Parser {
        self.parser.as_mut().expect("parser taken only on drop")
    }
}

impl<'a> Drop for PooledParser<'a> {
    fn drop(&mut self) {
        if let Some(parser) = self.parser.take() {
            self.pool.release(parser);
        }
    }
}

pub struct QueryManager {
    queries: FxHashMap<(Grammar, &'static str), Arc<Query>>,
    capture_names: FxHashMap<(Grammar, &'static str), Vec<&'static str>>,
    pools: FxHashMap<Grammar, ParserPool>,
}

impl QueryManager {
    /// Compiles every query this pipeline needs, for every grammar that
    /// defines it. Panics (a startup-fatal `QueryError`, per §4.A/§7) if
    /// any query source fails to compile — a broken query is a
    /// programmer error, not a runtime condition.
    pub fn new(entries: &[(Grammar, &'static str, &'static str)]) -> Result<Self, QueryError> {
        let mut queries = FxHashMap::default();
        let mut capture_names = FxHashMap::default();
        let mut pools = FxHashMap::default();

        for &(grammar, name, source) in entries {
            let language = grammar.language();
            let query = Query::new(&language, source).map_err(|source| QueryError::Compile { name, source })?;
            let names = query.capture_names().to_vec();
            queries.insert((grammar, name), Arc::new(query));
            capture_names.insert((grammar, name), names);
            pools.entry(grammar).or_insert_with(|| ParserPool::new(grammar));
        }

        Ok(Self {
            queries,
            capture_names,
            pools,
        })
    }

    #[must_use]
    pub fn get_matcher(&self, grammar: Grammar, query_name: &'static str) -> Option<Matcher> {
        let query = self.queries.get(&(grammar, query_name))?.clone();
        let names = self.capture_names.get(&(grammar, query_name))?.clone();
        Some(Matcher::new(query, names))
    }

    /// Panics if no query for `grammar` was ever registered via `new` —
    /// every grammar the pipeline uses must appear in at least one entry.
    #[must_use]
    pub fn get_parser(&self, grammar: Grammar) -> PooledParser<'_> {
        let pool = self
            .pools
            .get(&grammar)
            .unwrap_or_else(|| panic!("no parser pool registered for {grammar:?}"));
        PooledParser {
            parser: Some(pool.acquire()),
            pool,
        }
    }
}
