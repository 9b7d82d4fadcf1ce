//! JSDoc Parser (§4.B): turns a raw block-comment string into a
//! structured [`types::JsDoc`] record.

pub mod examples;
pub mod parser;
pub mod segment;
pub mod slug;
pub mod text;
pub mod types;

pub use parser::parse;
pub use types::*;
