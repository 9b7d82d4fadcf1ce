//! The canonical manifest data model (§3) and Manifest Builder (§4.H).

pub mod builder;
pub mod types;
pub mod validate;

pub use builder::build;
pub use types::*;
pub use validate::{validate, ValidationError};
