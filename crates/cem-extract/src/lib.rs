//! Class/Module Extractor (§4.F) and Merger (§4.G): turns one source
//! file's AST, plus the JSDoc/CSS/HTML-template records the other
//! extractor crates produce, into `cem_model::Module` declarations.

pub mod alias_link;
pub mod class_scan;
pub mod comments;
pub mod css_link;
pub mod decorator;
pub mod define_scan;
pub mod extractor;
pub mod imports;
pub mod merge;
pub mod module_build;
pub mod queries;
pub mod reactive;
pub mod superclass;
pub mod types;

pub use css_link::{FsStyleFileLoader, StyleFileLoader};
pub use extractor::extract;
pub use module_build::build_module;
