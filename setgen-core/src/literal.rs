//! Formatting of raw stored values into C# literals.

use crate::SettingKind;

/// The literal used when a setting has no stored value.
pub fn default_literal(kind: SettingKind) -> String {
    match kind {
        SettingKind::Bool => "false".to_string(),
        SettingKind::Int => "0".to_string(),
        SettingKind::Float => "0f".to_string(),
        SettingKind::String => "\"\"".to_string(),
    }
}

/// Format a raw stored value as a literal of the given kind.
///
/// - bools are stored as `0`/`1`; `1` and `true` map to `true`
/// - ints are emitted verbatim
/// - floats get an explicit `f` suffix
/// - strings are quoted with `\` and `"` escaped
///
/// Blank numeric values fall back to [`default_literal`].
pub fn format_literal(kind: SettingKind, raw: &str) -> String {
    match kind {
        SettingKind::Bool => {
            let raw = raw.trim();
            if raw == "1" || raw.eq_ignore_ascii_case("true") {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        SettingKind::Int => match raw.trim() {
            "" => default_literal(kind),
            value => value.to_string(),
        },
        SettingKind::Float => match raw.trim() {
            "" => default_literal(kind),
            value => format!("{}f", value),
        },
        SettingKind::String => quote(raw),
    }
}

fn quote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
