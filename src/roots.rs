//! Resolution of the root directories to scan.
//!
//! Strict priority: explicit arguments, then the enclosing git root,
//! then the `TODO_PATH` environment variable. All inputs are passed in
//! by the caller so the logic stays testable.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Environment variable holding a colon-separated fallback root list.
pub const TODO_PATH_VAR: &str = "TODO_PATH";

/// Determine the directories to scan.
///
/// 1. Explicit arguments win outright; nothing else is consulted.
/// 2. Otherwise the nearest ancestor of `cwd` (including `cwd` itself)
///    containing a `.git` directory becomes the single root.
/// 3. Otherwise `env_path` (the value of `TODO_PATH`) is split on `:`.
///    With no value to fall back on there is nothing to scan, which is
///    fatal.
pub fn resolve(explicit: &[PathBuf], cwd: &Path, env_path: Option<&str>) -> Result<Vec<PathBuf>> {
    if !explicit.is_empty() {
        return Ok(explicit.to_vec());
    }

    if let Some(root) = find_git_root(cwd) {
        return Ok(vec![root]);
    }

    match env_path {
        Some(value) => {
            let roots: Vec<PathBuf> = value
                .split(':')
                .filter(|part| !part.is_empty())
                .map(PathBuf::from)
                .collect();
            if roots.is_empty() {
                bail!("{TODO_PATH_VAR} is set but names no directories");
            }
            Ok(roots)
        }
        None => bail!(
            "no root directory: pass one explicitly, run inside a git \
             checkout, or set {TODO_PATH_VAR}"
        ),
    }
}

/// Walk upward from `start` looking for a `.git` marker directory.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
