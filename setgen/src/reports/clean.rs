//! Clean command report data structures.

use super::output::{Output, Report};

/// Report data from cleaning stale generated files.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Warning messages from pipeline.
    pub warnings: Vec<String>,
    /// Deleted (or, in a dry run, deletable) files.
    pub deleted: Vec<String>,
}

impl CleanReport {
    /// Whether any files were deleted (or would be deleted in dry run).
    pub fn has_deletions(&self) -> bool {
        !self.deleted.is_empty()
    }
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.has_deletions() {
            out.preformatted("No orphaned files found.");
            return;
        }

        if self.dry_run {
            out.section("Would delete");
        } else {
            out.section("Deleted");
        }
        for path in &self.deleted {
            out.removed_item(path);
        }
    }
}
