//! Batch reporting
//!
//! Shell-agnostic: this module only formats lines and keeps the tally;
//! the binary decides where they go. One line per document, a final
//! summary, and a nonzero exit when any document failed.

use crate::error::ConvertError;
use std::path::Path;

/// Aggregate success/failure counters for one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    succeeded: usize,
    failed: usize,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful document; returns the per-file line.
    pub fn record_success(&mut self, path: &Path) -> String {
        self.succeeded += 1;
        format!("  ✓ Successfully converted {}", path.display())
    }

    /// Record a failed document; returns the per-file line.
    pub fn record_failure(&mut self, path: &Path, err: &ConvertError) -> String {
        self.failed += 1;
        format!("  ✗ Error converting {}: {}", path.display(), err)
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// True when no document failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "Conversion complete: {} succeeded, {} failed",
            self.succeeded, self.failed
        )
    }
}
