//! Resolves a class's style bindings (§4.F) into the CSS custom
//! property records §4.D extracts, so the merger has something to fold
//! into `cssProperties` for each class.

use std::path::{Path, PathBuf};

use cem_common::DiagnosticSink;
use cem_css::CssExtractResult;
use cem_query::QueryManager;

use crate::types::{ExtractedClass, StyleBinding};

/// Reads an external stylesheet referenced by `import styles from
/// "./x.css"`. Kept as a trait, mirroring `cem_alias::SourceLoader`, so
/// tests can supply an in-memory graph instead of touching the
/// filesystem.
pub trait StyleFileLoader {
    fn read(&self, path: &Path) -> Option<String>;
}

pub struct FsStyleFileLoader;

impl StyleFileLoader for FsStyleFileLoader {
    fn read(&self, path: &Path) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }
}

/// `module_dir` is the directory containing the module whose class this
/// is, used to resolve `ExternalFile` specifiers relative to it.
#[must_use]
pub fn resolve_css_for_class(
    manager: &QueryManager,
    module_dir: &Path,
    class: &ExtractedClass,
    loader: &dyn StyleFileLoader,
    sink: &mut DiagnosticSink,
) -> CssExtractResult {
    let mut combined = CssExtractResult::default();

    for binding in &class.styles {
        match binding {
            StyleBinding::TaggedTemplate { raw_css } => {
                let mut result = cem_css::extract(manager, &format!("<{}:styles>", class.raw.name), raw_css, sink);
                combined.properties.append(&mut result.properties);
            }
            StyleBinding::ExternalFile { specifier } => {
                let path: PathBuf = module_dir.join(specifier);
                if let Some(source) = loader.read(&path) {
                    let mut result = cem_css::extract(manager, &path.display().to_string(), &source, sink);
                    combined.properties.append(&mut result.properties);
                }
            }
        }
    }

    combined.sort();
    combined
}

#[cfg(test)]
#[path = "tests/css_link.rs"]
mod tests;
