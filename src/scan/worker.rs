//! Scan workers: line-scan files from the queue against the active
//! pattern.

use crate::config::ScanConfig;
use crate::scan::{FileMatches, Todo};
use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Worker loop: drain the file channel until it closes.
///
/// Non-empty scans go to `sink` as `Ok`; a scan that violates the
/// pattern contract goes as `Err` and terminates the run from the
/// consumer side. Dropping `sink` on return closes the result channel
/// once the whole pool has drained.
pub fn run(source: Receiver<PathBuf>, sink: Sender<Result<FileMatches>>, config: &ScanConfig) {
    for file in source {
        let outcome = match scan_file(&file, config) {
            Ok(None) => continue,
            Ok(Some(matches)) => Ok(matches),
            Err(err) => Err(err),
        };
        if sink.send(outcome).is_err() {
            // Consumer is gone; nothing left to report to.
            return;
        }
    }
}

/// Scan one file, collecting annotation hits in line order.
///
/// Returns `Ok(None)` when the file yields no hits or cannot be opened
/// (logged, non-fatal). A read error mid-file stops the scan but keeps
/// the hits gathered so far. Only a pattern-contract violation is an
/// `Err`.
pub fn scan_file(file: &Path, config: &ScanConfig) -> Result<Option<FileMatches>> {
    debug!(file = %file.display(), "scanning");

    let handle = match File::open(file) {
        Ok(handle) => handle,
        Err(err) => {
            warn!(file = %file.display(), %err, "could not open file, skipping");
            return Ok(None);
        }
    };

    let mut todos = Vec::new();
    let reader = BufReader::new(handle);
    for (idx, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                // Binary or truncated content; keep what we have.
                warn!(file = %file.display(), %err, "read error, stopping scan of this file");
                break;
            }
        };

        let hit = config
            .pattern
            .match_line(&line)
            .with_context(|| format!("while scanning {}", file.display()))?;
        if let Some((tag, text)) = hit {
            debug!(file = %file.display(), line = idx + 1, tag = %tag, "found annotation");
            todos.push(Todo {
                line: idx + 1,
                tag,
                text,
            });
        }
    }

    if todos.is_empty() {
        return Ok(None);
    }
    Ok(Some(FileMatches {
        file: file.to_path_buf(),
        todos,
    }))
}
