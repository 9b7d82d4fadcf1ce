//! Abstracts reading module source text so the resolver can be tested
//! against an in-memory module graph without touching disk.

use std::path::{Path, PathBuf};

pub trait SourceLoader {
    fn read(&self, path: &Path) -> Option<String>;

    /// Tries `path` as given, then `.ts`, then `.d.ts` sibling lookups
    /// (§4.C: "crossing module boundaries and `.d.ts` files when
    /// necessary").
    fn resolve_module_file(&self, specifier_path: &Path) -> Option<(PathBuf, String)> {
        let candidates = [
            specifier_path.to_path_buf(),
            with_extension(specifier_path, "ts"),
            with_extension(specifier_path, "d.ts"),
            specifier_path.join("index.ts"),
            specifier_path.join("index.d.ts"),
        ];
        for candidate in candidates {
            if let Some(text) = self.read(&candidate) {
                return Some((candidate, text));
            }
        }
        None
    }
}

fn with_extension(path: &Path, ext: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

pub struct FsSourceLoader;

impl SourceLoader for FsSourceLoader {
    fn read(&self, path: &Path) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }
}

/// An in-memory module graph, used by tests and by callers that have
/// already loaded every file in the workspace (e.g. the batch
/// generator, which reads each file once up front).
#[derive(Default)]
pub struct MapSourceLoader {
    files: rustc_hash::FxHashMap<PathBuf, String>,
}

impl MapSourceLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }
}

impl SourceLoader for MapSourceLoader {
    fn read(&self, path: &Path) -> Option<String> {
        self.files.get(path).cloned()
    }
}
