//! Recursive file discovery for a single root.

use crate::config::ScanConfig;
use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Walk one root directory, streaming surviving file paths into `sink`.
///
/// Traversal is best-effort: unreadable entries are logged and skipped,
/// never aborting the walk. The walker follows symlinks and applies the
/// configured directory-pruning globs; gitignore handling is disabled
/// since the ignore rules alone decide what is visited.
///
/// Dropping `sink` on return is what lets the file channel close once
/// every root has been walked.
pub fn walk_root(root: &Path, config: &ScanConfig, sink: Sender<PathBuf>) {
    info!(root = %root.display(), "walking directory");

    let filters = config.filters.clone();
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .follow_links(true)
        .filter_entry(move |entry| {
            // The root was asked for explicitly; only prune below it.
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if !is_dir {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !filters.prune_dir(&name)
        })
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(root = %root.display(), %err, "walk error, continuing");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if config.filters.skip_file(&name) {
            debug!(file = %entry.path().display(), "skipping by extension");
            continue;
        }

        // A send fails only when every worker is gone, i.e. the run is
        // already over.
        if sink.send(entry.into_path()).is_err() {
            return;
        }
    }
}
