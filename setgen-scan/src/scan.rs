//! Filtering declarations down to settings containers.

use crate::{AttributeArg, Declaration, DeclarationTarget};

/// Find every declaration carrying `attribute` with a non-empty path argument.
///
/// The attribute is matched by simple name, with or without the
/// `Attribute` suffix and regardless of namespace qualification. Only the
/// first matching attribute on a declaration is considered. Declarations
/// without it, or whose first argument is not a non-empty string literal,
/// are skipped.
pub fn scan(declarations: &[Declaration], attribute: &str) -> Vec<DeclarationTarget> {
    let mut targets = Vec::new();

    for declaration in declarations {
        let Some(found) = declaration
            .attributes
            .iter()
            .find(|candidate| attribute_matches(&candidate.name, attribute))
        else {
            continue;
        };

        match found.args.first() {
            Some(AttributeArg::String(path)) if !path.is_empty() => {
                targets.push(DeclarationTarget::from_declaration(declaration, path, attribute));
            }
            arg => {
                tracing::trace!(
                    declaration = %declaration.qualified_name(),
                    file = %declaration.file.display(),
                    ?arg,
                    "skipping declaration without a settings path"
                );
            }
        }
    }

    targets
}

/// Check whether an attribute name as written refers to `attribute`.
///
/// `GlobalSettings`, `GlobalSettingsAttribute`, `Game.GlobalSettings` and
/// `global::GlobalSettingsAttribute` all match `GlobalSettings`.
pub fn attribute_matches(written: &str, attribute: &str) -> bool {
    let simple = written.rsplit(['.', ':']).next().unwrap_or(written);
    let wanted = attribute.strip_suffix("Attribute").unwrap_or(attribute);
    let simple = simple.strip_suffix("Attribute").unwrap_or(simple);
    !wanted.is_empty() && simple == wanted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attribute;

    fn settings_attribute(path: &str) -> Attribute {
        Attribute::new("GlobalSettings").with_arg(AttributeArg::String(path.to_string()))
    }

    #[test]
    fn test_attribute_matches() {
        assert!(attribute_matches("GlobalSettings", "GlobalSettings"));
        assert!(attribute_matches("GlobalSettingsAttribute", "GlobalSettings"));
        assert!(attribute_matches("Game.GlobalSettings", "GlobalSettings"));
        assert!(attribute_matches("global::GlobalSettingsAttribute", "GlobalSettings"));
        assert!(attribute_matches("GlobalSettings", "GlobalSettingsAttribute"));
        assert!(!attribute_matches("GlobalSettingsExtra", "GlobalSettings"));
        assert!(!attribute_matches("Settings", "GlobalSettings"));
        assert!(!attribute_matches("Attribute", "Attribute"));
    }

    #[test]
    fn test_scan_keeps_attributed_declarations() {
        let declarations = vec![
            Declaration::new("Plain", "Plain.cs"),
            Declaration::new("Settings", "Assets/Settings.cs")
                .in_namespace("Game")
                .with_modifiers(&["public", "static", "partial"])
                .with_attribute(settings_attribute("Settings.asset")),
        ];

        let targets = scan(&declarations, "GlobalSettings");

        assert_eq!(targets.len(), 1);
        let target = &targets[0];
        assert_eq!(target.name, "Settings");
        assert_eq!(target.namespace.as_deref(), Some("Game"));
        assert_eq!(target.settings_path, "Settings.asset");
        assert_eq!(target.attribute, "GlobalSettings");
        assert_eq!(target.modifiers, ["public", "static", "partial"]);
    }

    #[test]
    fn test_scan_skips_empty_or_missing_path() {
        let declarations = vec![
            Declaration::new("Empty", "a.cs").with_attribute(settings_attribute("")),
            Declaration::new("NoArgs", "a.cs").with_attribute(Attribute::new("GlobalSettings")),
            Declaration::new("Constant", "a.cs").with_attribute(
                Attribute::new("GlobalSettings")
                    .with_arg(AttributeArg::Expr("Paths . Main".to_string())),
            ),
        ];

        assert!(scan(&declarations, "GlobalSettings").is_empty());
    }

    #[test]
    fn test_scan_keeps_whitespace_path() {
        let declarations = vec![
            Declaration::new("Blank", "a.cs").with_attribute(settings_attribute("  ")),
        ];

        let targets = scan(&declarations, "GlobalSettings");
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].settings_path, "  ");
    }

    #[test]
    fn test_scan_matches_qualified_attribute() {
        let declarations = vec![
            Declaration::new("Settings", "a.cs").with_attribute(
                Attribute::new("global::Game.GlobalSettingsAttribute")
                    .with_arg(AttributeArg::String("a.asset".to_string())),
            ),
        ];

        assert_eq!(scan(&declarations, "GlobalSettings").len(), 1);
    }

    #[test]
    fn test_scan_ignores_other_attributes() {
        let declarations = vec![
            Declaration::new("Settings", "a.cs")
                .with_attribute(
                    Attribute::new("Serializable")
                        .with_arg(AttributeArg::String("x".to_string())),
                )
                .with_attribute(settings_attribute("b.asset")),
        ];

        let targets = scan(&declarations, "GlobalSettings");
        assert_eq!(targets[0].settings_path, "b.asset");
    }

    #[test]
    fn test_scan_preserves_input_order() {
        let declarations = vec![
            Declaration::new("B", "b.cs").with_attribute(settings_attribute("b.asset")),
            Declaration::new("A", "a.cs").with_attribute(settings_attribute("a.asset")),
        ];

        let names: Vec<_> = scan(&declarations, "GlobalSettings")
            .into_iter()
            .map(|target| target.name)
            .collect();
        assert_eq!(names, ["B", "A"]);
    }
}
