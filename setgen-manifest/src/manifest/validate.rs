//! Semantic checks run after a manifest deserializes.

use miette::SourceSpan;
use setgen_asset::FieldKey;
use setgen_core::validate_identifier;

use super::Manifest;
use crate::{Result, SourceContext};

pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let project = &manifest.project;

    if project.sources.is_empty() {
        return Err(ctx.validation_error(
            "[project].sources must list at least one directory",
            find_key_span(ctx.src(), "sources"),
        ));
    }

    if project.output.as_os_str().is_empty() {
        return Err(ctx.validation_error(
            "[project].output cannot be empty",
            find_key_span(ctx.src(), "output"),
        ));
    }

    if let Some(reason) = validate_identifier(&project.attribute) {
        return Err(ctx.invalid_identifier_error(
            &project.attribute,
            "attribute name",
            reason,
            find_value_span(ctx.src(), "attribute", &project.attribute),
        ));
    }

    validate_lookup(&manifest.runtime.lookup, ctx)?;
    validate_format(manifest, ctx)
}

/// The lookup may be qualified; every dotted segment must be an identifier.
fn validate_lookup(lookup: &str, ctx: &SourceContext) -> Result<()> {
    for segment in lookup.split('.') {
        if let Some(reason) = validate_identifier(segment) {
            return Err(ctx.invalid_identifier_error(
                lookup,
                "lookup method",
                reason,
                find_value_span(ctx.src(), "lookup", lookup),
            ));
        }
    }
    Ok(())
}

fn validate_format(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let format = &manifest.format;

    if format.marker.trim().is_empty() {
        return Err(ctx.validation_error(
            "[format].marker cannot be empty",
            find_key_span(ctx.src(), "marker"),
        ));
    }

    if format.marker.contains('\n') {
        return Err(ctx.validation_error(
            "[format].marker must fit on one line",
            find_key_span(ctx.src(), "marker"),
        ));
    }

    let keys: Vec<(FieldKey, &str)> = format.keys.iter().collect();
    for (i, (field, key)) in keys.iter().enumerate() {
        if key.trim().is_empty() || key.contains('\n') {
            return Err(ctx.validation_error(
                format!("[format.keys].{} must be a single non-empty line", field),
                find_key_span(ctx.src(), field.as_str()),
            ));
        }

        if let Some((first, _)) = keys[..i].iter().find(|(_, earlier)| earlier == key) {
            return Err(ctx.duplicate_key_error(
                *key,
                first.as_str(),
                field.as_str(),
                find_value_span(ctx.src(), field.as_str(), key),
            ));
        }
    }

    Ok(())
}

/// Find the span of a quoted value assigned to `key`, e.g. the `GetSetting`
/// in `lookup = "GetSetting"`.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("{} = \"{}\"", key, value),
        format!("{} = '{}'", key, value),
        format!("{}=\"{}\"", key, value),
        format!("{}='{}'", key, value),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // The value starts one quote past the key and assignment.
            let start = pos + pattern.len() - value.len() - 1;
            return Some(SourceSpan::from((start, value.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Find the span of `key` where it starts an assignment line.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let rest = &line[indent..];
        if let Some(after) = rest.strip_prefix(key) {
            if after.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, key.len())));
            }
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_value_span() {
        let src = "[runtime]\nlookup = \"Get Setting\"\n";
        let span = find_value_span(src, "lookup", "Get Setting").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Get Setting");
    }

    #[test]
    fn test_find_value_span_single_quotes() {
        let src = "attribute='1Bad'";
        let span = find_value_span(src, "attribute", "1Bad").unwrap();
        assert_eq!(span.offset(), 11);
    }

    #[test]
    fn test_find_key_span() {
        let src = "[project]\n  sources = []\n";
        let span = find_key_span(src, "sources").unwrap();
        assert_eq!(span.offset(), 12);
        assert_eq!(span.len(), 7);
    }

    #[test]
    fn test_find_key_span_ignores_prefixes() {
        assert!(find_key_span("sources_extra = 1\n", "sources").is_none());
        assert!(find_key_span("# sources = []\n", "sources").is_none());
    }
}
