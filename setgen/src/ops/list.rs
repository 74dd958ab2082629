//! List operation - show the records of one settings-definition file.

use std::path::Path;

use setgen_asset::{AssetFormat, SettingsSource, reconstruct_source};
use setgen_core::normalize;

use crate::reports::{ListReport, ListedSetting};

/// Execute the list operation.
pub fn list(path: &Path, format: &AssetFormat) -> setgen_asset::Result<ListReport> {
    let source = SettingsSource::read(path)?;
    let batch = reconstruct_source(&source, format)?;

    let settings = batch
        .iter()
        .map(|setting| ListedSetting {
            identifier: normalize(setting.raw_name()),
            name: setting.raw_name().to_string(),
            kind: setting.kind(),
            value: setting.literal_value().to_string(),
            description: setting.description().to_string(),
        })
        .collect();

    Ok(ListReport {
        path: source.path,
        settings,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use setgen_asset::Error;
    use setgen_core::SettingKind;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_list() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Settings.asset");
        fs::write(
            &path,
            "settings:\n- <SettingName>k__BackingField: maxPlayers\n  <SettingType>k__BackingField: 1\n  <IntValue>k__BackingField: 16\n",
        )
        .unwrap();

        let report = list(&path, &AssetFormat::default()).unwrap();
        assert_eq!(report.path, path);
        assert_eq!(report.settings.len(), 1);
        assert_eq!(report.settings[0].identifier, "MAX_PLAYERS");
        assert_eq!(report.settings[0].kind, SettingKind::Int);
        assert_eq!(report.settings[0].value, "16");
    }

    #[test]
    fn test_list_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = list(&temp.path().join("missing.asset"), &AssetFormat::default()).unwrap_err();
        assert!(matches!(*err, Error::NotFound { .. }));
    }
}
