//! Setting data model shared across the pipeline.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Value kind of a setting.
///
/// The discriminants match the kind index stored in settings-definition
/// files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Bool = 0,
    Int = 1,
    Float = 2,
    String = 3,
}

impl SettingKind {
    /// All kinds in index order.
    pub const ALL: [SettingKind; 4] = [
        SettingKind::Bool,
        SettingKind::Int,
        SettingKind::Float,
        SettingKind::String,
    ];

    /// Map a stored kind index to a kind.
    ///
    /// Negative indices are reserved sentinels and, like indices past the
    /// last known kind, map to `None`.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(SettingKind::Bool),
            1 => Some(SettingKind::Int),
            2 => Some(SettingKind::Float),
            3 => Some(SettingKind::String),
            _ => None,
        }
    }

    /// The stored kind index.
    pub fn index(&self) -> i64 {
        *self as i64
    }

    /// Get the kind name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKind::Bool => "bool",
            SettingKind::Int => "int",
            SettingKind::Float => "float",
            SettingKind::String => "string",
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reconstructed setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    kind: SettingKind,
    raw_name: String,
    description: String,
    literal_value: String,
}

impl Setting {
    /// Create a setting from an already formatted literal.
    pub fn new(
        kind: SettingKind,
        raw_name: impl Into<String>,
        description: impl Into<String>,
        literal_value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            raw_name: raw_name.into(),
            description: description.into(),
            literal_value: literal_value.into(),
        }
    }

    pub fn kind(&self) -> SettingKind {
        self.kind
    }

    /// The name as entered by the author, e.g. `"Test Setting"`.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The value as a C# literal, e.g. `2.5f` or `"hello"`.
    pub fn literal_value(&self) -> &str {
        &self.literal_value
    }
}

/// Ordered, name-deduplicated collection of settings from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsBatch {
    settings: IndexMap<String, Setting>,
}

impl SettingsBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a setting unless one with the same raw name is already present.
    ///
    /// Returns `false` when the setting was dropped as a duplicate.
    pub fn push(&mut self, setting: Setting) -> bool {
        if self.settings.contains_key(setting.raw_name()) {
            return false;
        }
        self.settings.insert(setting.raw_name.clone(), setting);
        true
    }

    /// Check whether a setting with this raw name exists.
    pub fn contains(&self, raw_name: &str) -> bool {
        self.settings.contains_key(raw_name)
    }

    /// Look up a setting by raw name.
    pub fn get(&self, raw_name: &str) -> Option<&Setting> {
        self.settings.get(raw_name)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Iterate settings in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Setting> {
        self.settings.values()
    }
}

impl Serialize for SettingsBatch {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.settings.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_index() {
        assert_eq!(SettingKind::from_index(0), Some(SettingKind::Bool));
        assert_eq!(SettingKind::from_index(1), Some(SettingKind::Int));
        assert_eq!(SettingKind::from_index(2), Some(SettingKind::Float));
        assert_eq!(SettingKind::from_index(3), Some(SettingKind::String));
        assert_eq!(SettingKind::from_index(4), None);
        assert_eq!(SettingKind::from_index(-1), None);
    }

    #[test]
    fn test_kind_index_round_trips() {
        for kind in SettingKind::ALL {
            assert_eq!(SettingKind::from_index(kind.index()), Some(kind));
        }
    }

    #[test]
    fn test_batch_first_occurrence_wins() {
        let mut batch = SettingsBatch::new();
        assert!(batch.push(Setting::new(SettingKind::Int, "Dup", "first", "1")));
        assert!(!batch.push(Setting::new(SettingKind::Int, "Dup", "second", "2")));

        assert_eq!(batch.len(), 1);
        let dup = batch.get("Dup").unwrap();
        assert_eq!(dup.description(), "first");
        assert_eq!(dup.literal_value(), "1");
    }

    #[test]
    fn test_batch_keeps_insertion_order() {
        let mut batch = SettingsBatch::new();
        batch.push(Setting::new(SettingKind::Bool, "b", "", "true"));
        batch.push(Setting::new(SettingKind::Int, "a", "", "3"));
        batch.push(Setting::new(SettingKind::String, "c", "", "\"x\""));

        let names: Vec<_> = batch.iter().map(Setting::raw_name).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_batch_serializes_as_list() {
        let mut batch = SettingsBatch::new();
        batch.push(Setting::new(SettingKind::Float, "Speed", "Move speed", "2.5f"));

        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json[0]["kind"], "float");
        assert_eq!(json[0]["raw_name"], "Speed");
        assert_eq!(json[0]["literal_value"], "2.5f");
    }
}
