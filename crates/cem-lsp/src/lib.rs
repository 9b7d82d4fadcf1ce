//! Document Model (§4.J), Completion-Context Resolver (§4.K), and the
//! LSP surface (§6) over a [`cem_registry::Registry`].

pub mod backend;
pub mod capabilities;
pub mod completion;
pub mod completion_context;
pub mod definition;
pub mod diagnostics;
pub mod document;
pub mod hover;
pub mod levenshtein;
pub mod references;
pub mod usage_scan;

pub use backend::Backend;
pub use completion_context::CompletionContext;
