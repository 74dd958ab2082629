//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a compilation pass that writes nothing.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Number of settings containers found.
    pub containers: usize,
    /// Containers whose generated file would carry an error.
    pub failed: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} settings container{} in {} compile cleanly",
                self.containers,
                if self.containers == 1 { "" } else { "s" },
                self.config_path.display()
            ));
        } else {
            out.preformatted(&format!(
                "✗ {} of {} settings containers failed",
                self.failed, self.containers
            ));
        }
    }
}
