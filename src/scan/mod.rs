//! The concurrent discovery-and-scan pipeline.
//!
//! Roots fan out to one discovery thread each, all feeding a bounded
//! file-path channel. A fixed pool of workers drains that channel, scans
//! each file against the active pattern, and pushes non-empty results
//! into a bounded result channel that the caller consumes.
//!
//! Shutdown is driven entirely by channel closure: the file channel
//! closes when the last discovery thread exits (its `Sender` clone
//! drops), which lets the workers drain and exit, which in turn closes
//! the result channel and ends the caller's receive loop. No stage can
//! observe a closed channel before its producers are all done.

pub mod discover;
pub mod worker;

use crate::config::ScanConfig;
use anyhow::Result;
use crossbeam_channel::{bounded, Receiver};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

/// Capacity of both hand-off channels.
const QUEUE_DEPTH: usize = 42;

/// One annotation hit inside a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// 1-based line number.
    pub line: usize,
    pub tag: String,
    pub text: String,
}

/// All hits for a single file, in ascending line order.
///
/// Only ever constructed with at least one hit; files without matches
/// are never emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatches {
    pub file: PathBuf,
    pub todos: Vec<Todo>,
}

/// Start the pipeline and return the result stream.
///
/// The receiver yields file results in arrival order (not deterministic
/// across files) and closes once every discovered file has been
/// scanned. A fatal scan error, such as a pattern breaking its
/// capture-group contract, arrives as an `Err` item.
pub fn scan(config: Arc<ScanConfig>, roots: Vec<PathBuf>) -> Receiver<Result<FileMatches>> {
    let (file_tx, file_rx) = bounded::<PathBuf>(QUEUE_DEPTH);
    let (result_tx, result_rx) = bounded::<Result<FileMatches>>(QUEUE_DEPTH);

    for root in roots {
        let sink = file_tx.clone();
        let config = Arc::clone(&config);
        thread::spawn(move || discover::walk_root(&root, &config, sink));
    }
    // The clones held by discovery threads now control the channel's
    // lifetime.
    drop(file_tx);

    for _ in 0..config.workers {
        let source = file_rx.clone();
        let sink = result_tx.clone();
        let config = Arc::clone(&config);
        thread::spawn(move || worker::run(source, sink, &config));
    }
    drop(result_tx);
    drop(file_rx);

    result_rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::IgnoreRules;
    use crate::pattern::Pattern;
    use std::collections::HashMap;
    use std::fs;

    fn fixture_tree(label: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("todos_scan_tests")
            .join(format!("{label}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn alpha_config() -> Arc<ScanConfig> {
        Arc::new(ScanConfig::new(
            Pattern::resolve("alpha").unwrap(),
            IgnoreRules::standard().unwrap(),
        ))
    }

    fn collect(results: Receiver<Result<FileMatches>>) -> HashMap<PathBuf, FileMatches> {
        results
            .into_iter()
            .map(|res| res.unwrap())
            .map(|m| (m.file.clone(), m))
            .collect()
    }

    #[test]
    fn test_pipeline_finds_matches_across_files() {
        let dir = fixture_tree("across");
        fs::write(
            dir.join("a.rs"),
            "fn main() {\n    // @TODO first\n}\n// @FIXME second\n",
        )
        .unwrap();
        fs::write(dir.join("b.py"), "# @HACK only one\n").unwrap();
        fs::write(dir.join("clean.rs"), "fn clean() {}\n").unwrap();

        let by_file = collect(scan(alpha_config(), vec![dir.clone()]));
        assert_eq!(by_file.len(), 2, "clean.rs must be suppressed");

        let a = &by_file[&dir.join("a.rs")];
        assert_eq!(a.todos.len(), 2);
        assert_eq!(a.todos[0], Todo {
            line: 2,
            tag: "@TODO".to_string(),
            text: "first".to_string(),
        });
        assert_eq!(a.todos[1].line, 4);
        assert_eq!(a.todos[1].tag, "@FIXME");

        let b = &by_file[&dir.join("b.py")];
        assert_eq!(b.todos.len(), 1);
        assert_eq!(b.todos[0].text, "only one");
    }

    #[test]
    fn test_in_file_ordering_is_ascending() {
        let dir = fixture_tree("ordering");
        let mut body = String::new();
        for i in 0..50 {
            body.push_str(&format!("// @TODO item {i}\nplain line\n"));
        }
        fs::write(dir.join("many.rs"), &body).unwrap();

        let by_file = collect(scan(alpha_config(), vec![dir.clone()]));
        let todos = &by_file[&dir.join("many.rs")].todos;
        assert_eq!(todos.len(), 50);
        for pair in todos.windows(2) {
            assert!(pair[0].line < pair[1].line);
        }
    }

    #[test]
    fn test_ignored_directories_contribute_nothing() {
        let dir = fixture_tree("pruned");
        for sub in [".git", "venv", "__pycache__", "build"] {
            let pruned = dir.join(sub);
            fs::create_dir_all(&pruned).unwrap();
            fs::write(pruned.join("inside.rs"), "// @TODO hidden\n").unwrap();
        }
        fs::write(dir.join("visible.rs"), "// @TODO seen\n").unwrap();

        let by_file = collect(scan(alpha_config(), vec![dir.clone()]));
        assert_eq!(by_file.len(), 1);
        assert!(by_file.contains_key(&dir.join("visible.rs")));
    }

    #[test]
    fn test_skipped_extensions_are_never_scanned() {
        let dir = fixture_tree("skipped");
        // Content would match if the file were ever opened.
        fs::write(dir.join("fake.png"), "// @TODO in a png\n").unwrap();
        fs::write(dir.join("real.rs"), "// @TODO in source\n").unwrap();

        let by_file = collect(scan(alpha_config(), vec![dir.clone()]));
        assert_eq!(by_file.len(), 1);
        assert!(by_file.contains_key(&dir.join("real.rs")));
    }

    #[test]
    fn test_multiple_roots_are_all_walked() {
        let base = fixture_tree("multiroot");
        let (one, two) = (base.join("one"), base.join("two"));
        fs::create_dir_all(&one).unwrap();
        fs::create_dir_all(&two).unwrap();
        fs::write(one.join("a.rs"), "// @TODO from one\n").unwrap();
        fs::write(two.join("b.rs"), "// @TODO from two\n").unwrap();

        let by_file = collect(scan(alpha_config(), vec![one.clone(), two.clone()]));
        assert_eq!(by_file.len(), 2);
        assert!(by_file.contains_key(&one.join("a.rs")));
        assert!(by_file.contains_key(&two.join("b.rs")));
    }

    #[test]
    fn test_missing_root_yields_no_results() {
        let dir = fixture_tree("missing").join("does_not_exist");
        let results = scan(alpha_config(), vec![dir]);
        assert!(results.into_iter().next().is_none());
    }

    #[test]
    fn test_contract_violation_surfaces_as_error() {
        let dir = fixture_tree("contract");
        fs::write(dir.join("input.txt"), "left\n").unwrap();

        let config = Arc::new(ScanConfig::new(
            Pattern::resolve(r"(left)|(right)").unwrap(),
            IgnoreRules::standard().unwrap(),
        ));
        let outcomes: Vec<_> = scan(config, vec![dir]).into_iter().collect();
        assert!(outcomes.iter().any(|res| res.is_err()));
    }

    #[test]
    fn test_explicit_root_is_never_pruned() {
        // A root whose own basename matches an ignore glob was asked
        // for explicitly and must still be walked.
        let base = fixture_tree("hiddenroot");
        let root = base.join(".hidden");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("h.rs"), "// @TODO inside hidden root\n").unwrap();

        let by_file = collect(scan(alpha_config(), vec![root.clone()]));
        assert_eq!(by_file.len(), 1);
        assert!(by_file.contains_key(&root.join("h.rs")));
    }

    #[test]
    fn test_symlinked_directories_are_followed() {
        #[cfg(unix)]
        {
            let dir = fixture_tree("symlink");
            let target = dir.join("target");
            fs::create_dir_all(&target).unwrap();
            fs::write(target.join("t.rs"), "// @TODO behind link\n").unwrap();

            let root = dir.join("root");
            fs::create_dir_all(&root).unwrap();
            std::os::unix::fs::symlink(&target, root.join("link")).unwrap();

            let by_file = collect(scan(alpha_config(), vec![root.clone()]));
            assert_eq!(by_file.len(), 1);
            let (file, matches) = by_file.iter().next().unwrap();
            assert!(file.starts_with(&root), "path should be under the root");
            assert_eq!(matches.todos[0].text, "behind link");
        }
    }
}
