//! Record reconstruction from field-major settings text.
//!
//! Records are never delimited explicitly. The name and type streams define
//! the record count and must line up one-to-one; value and description
//! streams may be shorter, in which case the missing entries fall back to
//! kind defaults. All positional correlation happens in [`correlate`].

use setgen_core::{Setting, SettingKind, SettingsBatch, default_literal, format_literal};

use crate::{AssetFormat, Error, FieldKey, FieldStreams, Result, SettingsSource};

/// Reconstruct the settings stored in `text`.
pub fn reconstruct(text: &str, format: &AssetFormat) -> Result<SettingsBatch> {
    reconstruct_with_filename(text, "<settings>", format)
}

/// Reconstruct the settings of a resolved settings-definition file.
pub fn reconstruct_source(source: &SettingsSource, format: &AssetFormat) -> Result<SettingsBatch> {
    reconstruct_with_filename(&source.content, &source.filename(), format)
}

/// Reconstruct the settings stored in `text`, naming `filename` in errors.
///
/// # Errors
///
/// - [`Error::MissingMarker`] when the settings marker is absent
/// - [`Error::NoParameters`] when no name lines follow the marker
/// - [`Error::CountMismatch`] when the name and type streams differ in length
///
/// Records with an unparseable, negative or unknown kind index are skipped,
/// as are records repeating an earlier name.
pub fn reconstruct_with_filename(
    text: &str,
    filename: &str,
    format: &AssetFormat,
) -> Result<SettingsBatch> {
    let marker_at = text
        .find(format.marker.as_str())
        .ok_or_else(|| Error::missing_marker(&format.marker, text, filename))?;
    let marker_span = (marker_at, format.marker.len());
    let block = &text[marker_at + format.marker.len()..];

    let streams = FieldStreams::extract(block, &format.keys);
    let names = streams.len(FieldKey::Name);
    let types = streams.len(FieldKey::Type);

    if names == 0 {
        return Err(Error::no_parameters(
            format.keys.get(FieldKey::Name),
            text,
            filename,
            marker_span,
        ));
    }

    if names != types {
        return Err(Error::count_mismatch(
            names,
            types,
            text,
            filename,
            marker_span,
        ));
    }

    let mut batch = SettingsBatch::new();
    for (index, name) in streams.get(FieldKey::Name).iter().enumerate() {
        let Some(setting) = correlate(&streams, index, name) else {
            continue;
        };
        if !batch.push(setting) {
            tracing::debug!(index, name = %name, "dropping duplicate setting");
        }
    }

    tracing::debug!(file = filename, records = names, settings = batch.len(), "reconstructed settings");
    Ok(batch)
}

/// Assemble the record at `index` from the parallel streams.
fn correlate(streams: &FieldStreams, index: usize, name: &str) -> Option<Setting> {
    let raw_kind = streams.value_at(FieldKey::Type, index)?.trim();

    let kind_index: i64 = match raw_kind.parse() {
        Ok(kind_index) => kind_index,
        Err(_) => {
            tracing::debug!(index, name, kind = raw_kind, "skipping setting with unparseable kind");
            return None;
        }
    };

    if kind_index < 0 {
        tracing::debug!(index, name, kind_index, "skipping setting with reserved kind");
        return None;
    }

    let Some(kind) = SettingKind::from_index(kind_index) else {
        tracing::debug!(index, name, kind_index, "skipping setting with unknown kind");
        return None;
    };

    let literal = match streams.value_at(value_key(kind), index) {
        Some(raw) => format_literal(kind, raw),
        None => default_literal(kind),
    };
    let description = streams
        .value_at(FieldKey::Description, index)
        .unwrap_or_default();

    Some(Setting::new(kind, name, description, literal))
}

fn value_key(kind: SettingKind) -> FieldKey {
    match kind {
        SettingKind::Bool => FieldKey::BoolValue,
        SettingKind::Int => FieldKey::IntValue,
        SettingKind::Float => FieldKey::FloatValue,
        SettingKind::String => FieldKey::StringValue,
    }
}
