//! Run configuration assembled at startup.

use crate::filter::IgnoreRules;
use crate::pattern::Pattern;

/// Number of scan workers pulling from the file queue.
pub const SCAN_WORKERS: usize = 7;

/// Everything discovery and scan workers need, built once in `main`
/// and shared read-only behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// The active annotation matcher.
    pub pattern: Pattern,
    /// Directory-pruning and file-skipping rules.
    pub filters: IgnoreRules,
    /// Worker pool size.
    pub workers: usize,
}

impl ScanConfig {
    pub fn new(pattern: Pattern, filters: IgnoreRules) -> Self {
        ScanConfig {
            pattern,
            filters,
            workers: SCAN_WORKERS,
        }
    }
}
