//! Static ignore rules applied during file discovery.
//!
//! Two independent filters: directory basenames matched against glob
//! patterns prune whole subtrees; file extensions in a skip-set discard
//! individual files (binaries, media, compiled artifacts).

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Directory basenames pruned from traversal.
const IGNORED_DIR_GLOBS: &[&str] = &[".*", "build", "venv", "__pycache__"];

/// File extensions (leading dot included) never queued for scanning.
const SKIPPED_EXTENSIONS: &[&str] = &[
    ".pyc", ".o", ".a", ".so", ".mp3", ".zip", ".gz", ".png", ".jpg", ".gif",
    ".jpeg", ".bmp", ".ico", ".pdf", ".DS_Store", ".epub", ".mobi", ".ttf",
    ".otf", ".plist",
];

/// Read-only ignore rules, built once at startup.
///
/// Glob validity is checked here so a bad pattern fails the run before
/// any traversal starts.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    dirs: GlobSet,
}

impl IgnoreRules {
    /// Build the standard rule set.
    pub fn standard() -> Result<Self> {
        Self::with_dir_globs(IGNORED_DIR_GLOBS)
    }

    fn with_dir_globs(patterns: &[&str]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .with_context(|| format!("invalid ignore glob {pattern:?}"))?;
            builder.add(glob);
        }
        let dirs = builder.build().context("failed to compile ignore globs")?;
        Ok(IgnoreRules { dirs })
    }

    /// Whether a directory with this basename should be pruned entirely.
    pub fn prune_dir(&self, basename: &str) -> bool {
        self.dirs.is_match(basename)
    }

    /// Whether a file with this basename should be skipped.
    pub fn skip_file(&self, basename: &str) -> bool {
        match file_suffix(basename) {
            Some(suffix) => SKIPPED_EXTENSIONS.contains(&suffix),
            None => false,
        }
    }
}

/// The suffix from the last `.` of a file name, dot included.
///
/// Unlike `Path::extension`, a name that is nothing but a dotted suffix
/// (`.DS_Store`) yields that suffix, which is what the skip-set expects.
fn file_suffix(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx..])
}
