//! CSS Extractor (§4.D): custom-property extraction for external
//! stylesheets and CSS-tagged template literals.

pub mod cache;
pub mod comments;
pub mod extractor;
pub mod queries;
pub mod types;
pub mod varscan;

pub use cache::CssCache;
pub use extractor::extract;
pub use types::{CssCustomProperty, CssExtractResult};
