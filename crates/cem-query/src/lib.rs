//! Query Manager (§4.A): compiles and pools tree-sitter queries/parsers
//! shared by every extractor crate.

pub mod error;
pub mod grammar;
pub mod manager;
pub mod matcher;

pub use error::QueryError;
pub use grammar::Grammar;
pub use manager::{PooledParser, QueryManager};
pub use matcher::{Capture, CaptureMap, Matcher};

pub use tree_sitter;
