//! List command report data structures.

use std::path::PathBuf;

use serde::Serialize;
use setgen_core::SettingKind;

use super::output::{Output, Report};

/// The records reconstructed from one settings-definition file.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub path: PathBuf,
    pub settings: Vec<ListedSetting>,
}

/// One reconstructed record.
#[derive(Debug, Serialize)]
pub struct ListedSetting {
    /// Generated identifier; empty when the name has no usable characters.
    pub identifier: String,
    /// Name as stored in the file.
    pub name: String,
    pub kind: SettingKind,
    /// Value as a C# literal.
    pub value: String,
    pub description: String,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Source", &self.path.display().to_string());

        if self.settings.is_empty() {
            out.preformatted("No settings found.");
            return;
        }

        out.newline();
        out.section(&format!("Settings ({})", self.settings.len()));
        for setting in &self.settings {
            let identifier = if setting.identifier.is_empty() {
                format!("<{}>", setting.name)
            } else {
                setting.identifier.clone()
            };
            let mut line = format!("{} {} = {}", setting.kind, identifier, setting.value);
            if !setting.description.is_empty() {
                line.push_str("  // ");
                line.push_str(&setting.description);
            }
            out.list_item(&line);
        }
    }
}
