//! Layout of a settings-definition file.

use std::fmt;

use serde::Deserialize;

/// One of the seven per-record fields stored in a settings-definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Type,
    Description,
    FloatValue,
    IntValue,
    BoolValue,
    StringValue,
}

impl FieldKey {
    /// All field keys in stream order.
    pub const ALL: [FieldKey; 7] = [
        FieldKey::Name,
        FieldKey::Type,
        FieldKey::Description,
        FieldKey::FloatValue,
        FieldKey::IntValue,
        FieldKey::BoolValue,
        FieldKey::StringValue,
    ];

    /// Position of this key's stream in [`FieldKey::ALL`].
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// The configuration name of this key (as used in `[format.keys]`).
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Type => "type",
            FieldKey::Description => "description",
            FieldKey::FloatValue => "float-value",
            FieldKey::IntValue => "int-value",
            FieldKey::BoolValue => "bool-value",
            FieldKey::StringValue => "string-value",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The literal key text matched for each field.
///
/// Defaults are the serialized backing-field names Unity writes for the
/// settings container's records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FieldKeys {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub float_value: String,
    pub int_value: String,
    pub bool_value: String,
    pub string_value: String,
}

impl FieldKeys {
    /// Get the literal key text for a field.
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Type => &self.kind,
            FieldKey::Description => &self.description,
            FieldKey::FloatValue => &self.float_value,
            FieldKey::IntValue => &self.int_value,
            FieldKey::BoolValue => &self.bool_value,
            FieldKey::StringValue => &self.string_value,
        }
    }

    /// Iterate `(field, key text)` pairs in stream order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        FieldKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

impl Default for FieldKeys {
    fn default() -> Self {
        Self {
            name: "<SettingName>k__BackingField".to_string(),
            kind: "<SettingType>k__BackingField".to_string(),
            description: "<Description>k__BackingField".to_string(),
            float_value: "<FloatValue>k__BackingField".to_string(),
            int_value: "<IntValue>k__BackingField".to_string(),
            bool_value: "<BoolValue>k__BackingField".to_string(),
            string_value: "<StringValue>k__BackingField".to_string(),
        }
    }
}

/// How settings records are laid out in a settings-definition file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetFormat {
    /// Token separating the preamble from the settings block.
    pub marker: String,
    /// Literal key text for each field.
    pub keys: FieldKeys,
}

impl Default for AssetFormat {
    fn default() -> Self {
        Self {
            marker: "settings:".to_string(),
            keys: FieldKeys::default(),
        }
    }
}
