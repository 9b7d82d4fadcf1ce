//! File watching (§4.I, §5): watches the workspace root and calls
//! `Registry::invalidate` on changes, debounced to coalesce bursts
//! (≥50ms).

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use tokio::sync::mpsc;
use tracing::{error, warn};

const DEBOUNCE_WINDOW: Duration = Duration::from_millis(50);

/// A running watcher. Dropping it stops watching.
pub struct Watcher {
    _debouncer: notify_debouncer_mini::Debouncer<notify::RecommendedWatcher>,
    pub events: mpsc::UnboundedReceiver<Vec<PathBuf>>,
}

/// Starts watching `root` recursively; each coalesced batch of changed
/// paths is sent on the returned channel.
pub fn watch(root: &Path) -> notify::Result<Watcher> {
    let (tx, rx) = mpsc::unbounded_channel();

    let mut debouncer = new_debouncer(DEBOUNCE_WINDOW, move |result: DebounceEventResult| match result {
        Ok(events) => {
            let paths: Vec<PathBuf> = events.into_iter().map(|e| e.path).collect();
            if !paths.is_empty() && tx.send(paths).is_err() {
                warn!("watcher event dropped: receiver gone");
            }
        }
        Err(err) => error!(?err, "file watcher error"),
    })?;

    debouncer.watcher().watch(root, notify::RecursiveMode::Recursive)?;

    Ok(Watcher { _debouncer: debouncer, events: rx })
}
