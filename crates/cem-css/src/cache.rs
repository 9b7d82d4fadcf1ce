//! Per-file cache of extraction results, keyed by absolute path (§4.D:
//! "Caching: per absolute path, protected by a read/write lock.
//! Invalidation takes a set of paths.").

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::types::CssExtractResult;

#[derive(Default)]
pub struct CssCache {
    entries: RwLock<FxHashMap<PathBuf, CssExtractResult>>,
}

impl CssCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, path: &Path) -> Option<CssExtractResult> {
        self.entries.read().get(path).cloned()
    }

    pub fn insert(&self, path: PathBuf, result: CssExtractResult) {
        self.entries.write().insert(path, result);
    }

    /// Drops cached entries for exactly the given paths, leaving
    /// everything else untouched.
    pub fn invalidate(&self, paths: &[PathBuf]) {
        let mut entries = self.entries.write();
        for path in paths {
            entries.remove(path);
        }
    }
}

#[cfg(test)]
#[path = "tests/cache.rs"]
mod tests;
