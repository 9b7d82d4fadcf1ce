//! Type-Alias Resolver (§4.C): unwraps a referenced type down through
//! local and cross-module `type X = …` declarations to its underlying
//! union/literal form, for attributes whose declared type is an alias
//! rather than an inline union.

pub mod alias_scan;
pub mod import_scan;
pub mod loader;
pub mod queries;
pub mod resolver;
pub mod types;

pub use loader::{FsSourceLoader, MapSourceLoader, SourceLoader};
pub use resolver::{is_bare_identifier, AliasResolver};
pub use types::{AliasDecl, ImportBinding, ResolvedType};
