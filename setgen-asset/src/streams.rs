//! Per-field value streams extracted from a settings block.

use crate::{FieldKey, FieldKeys};

/// The values of every field key, each in order of appearance.
///
/// Streams are independent: the i-th entry of one stream is only related to
/// the i-th entry of another by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStreams {
    streams: [Vec<String>; 7],
}

impl FieldStreams {
    /// Scan a settings block line by line and collect `<key>: <value>` lines.
    ///
    /// A key must be the first token on its line, after optional indentation
    /// and an optional YAML list dash. The value is the rest of the line
    /// after the colon and one separating space; it is empty when the line
    /// ends at the colon.
    pub fn extract(block: &str, keys: &FieldKeys) -> Self {
        let mut streams = Self::default();

        for line in block.lines() {
            let entry = strip_list_dash(line.trim_start());
            for (field, key) in keys.iter() {
                if let Some(value) = match_entry(entry, key) {
                    streams.streams[field.position()].push(value.to_string());
                    break;
                }
            }
        }

        streams
    }

    /// Get the stream for a field.
    pub fn get(&self, key: FieldKey) -> &[String] {
        &self.streams[key.position()]
    }

    /// Get the value at `index` in a field's stream, if the stream is long enough.
    pub fn value_at(&self, key: FieldKey, index: usize) -> Option<&str> {
        self.get(key).get(index).map(String::as_str)
    }

    /// Number of values collected for a field.
    pub fn len(&self, key: FieldKey) -> usize {
        self.get(key).len()
    }
}

fn strip_list_dash(line: &str) -> &str {
    match line.strip_prefix('-') {
        Some(rest) if rest.is_empty() || rest.starts_with([' ', '\t']) => rest.trim_start(),
        _ => line,
    }
}

fn match_entry<'a>(entry: &'a str, key: &str) -> Option<&'a str> {
    if key.is_empty() {
        return None;
    }
    let rest = entry.strip_prefix(key)?.strip_prefix(':')?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix([' ', '\t'])
}
