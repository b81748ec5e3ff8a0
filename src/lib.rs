//! # todos - concurrent annotation-comment scanner
//!
//! `todos` walks a set of directories looking for source-code comments
//! that match an annotation pattern (`@TODO`, `FIXME`, ...) and prints
//! one `tag path:line: text` record per hit.
//!
//! ## Architecture
//!
//! - [`pattern`] - the annotation pattern registry and line matcher
//! - [`filter`] - directory-pruning globs and the extension skip-set
//! - [`roots`] - root-directory resolution (args > git root > `TODO_PATH`)
//! - [`scan`] - the concurrent discovery and scan pipeline
//! - [`output`] - result formatting
//! - [`logging`] - log-file setup
//! - [`config`] - the shared run configuration
//!
//! ## Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todos::config::ScanConfig;
//! use todos::filter::IgnoreRules;
//! use todos::pattern::Pattern;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ScanConfig::new(
//!         Pattern::resolve("common")?,
//!         IgnoreRules::standard()?,
//!     ));
//!     for result in todos::scan::scan(config, vec!["/path/to/repo".into()]) {
//!         let result = result?;
//!         for todo in &result.todos {
//!             println!("{} {}:{}: {}", todo.tag, result.file.display(), todo.line, todo.text);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Each root gets its own discovery thread feeding a bounded file-path
//! channel; a fixed worker pool drains it, scans files line by line, and
//! emits per-file results on a second bounded channel consumed by the
//! caller. Both channels close by sender-drop, so the consuming loop
//! terminates exactly when all discovered files have been scanned.

pub mod config;
pub mod filter;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod roots;
pub mod scan;
