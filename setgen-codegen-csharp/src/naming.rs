//! C#-specific names derived from a declaration.

use setgen_scan::{DeclarationTarget, TypeKeyword};

/// Generated file name: `{namespace|global}_{Type}_{Attribute}.g.cs`.
///
/// Nested types keep their enclosing chain, e.g.
/// `Game_Outer.Settings_GlobalSettings.g.cs`.
pub fn file_name(target: &DeclarationTarget) -> String {
    let namespace = target.namespace.as_deref().unwrap_or("global");
    let type_path = target
        .enclosing
        .iter()
        .map(|outer| outer.name.as_str())
        .chain(std::iter::once(target.name.as_str()))
        .collect::<Vec<_>>()
        .join(".");
    format!("{}_{}_{}.g.cs", namespace, type_path, target.attribute)
}

/// Header of a partial type declaration, without the opening brace.
///
/// The modifiers are kept as written. `partial` is moved directly in front
/// of the keyword, where C# requires it.
pub fn type_header(modifiers: &[String], keyword: TypeKeyword, name: &str) -> String {
    let mut parts: Vec<&str> = modifiers
        .iter()
        .map(String::as_str)
        .filter(|modifier| *modifier != "partial")
        .collect();
    parts.push("partial");
    parts.push(keyword.as_str());
    parts.push(name);
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use setgen_scan::{Attribute, AttributeArg, Declaration, EnclosingType, scan};

    use super::*;

    fn target(declaration: Declaration) -> DeclarationTarget {
        let declaration = declaration.with_attribute(
            Attribute::new("GlobalSettings")
                .with_arg(AttributeArg::String("Settings.asset".to_string())),
        );
        scan(&[declaration], "GlobalSettings").remove(0)
    }

    #[test]
    fn test_file_name_global_namespace() {
        let target = target(Declaration::new("Settings", "Settings.cs"));
        assert_eq!(file_name(&target), "global_Settings_GlobalSettings.g.cs");
    }

    #[test]
    fn test_file_name_keeps_full_namespace() {
        let target = target(Declaration::new("Settings", "Settings.cs").in_namespace("Game.Config"));
        assert_eq!(file_name(&target), "Game.Config_Settings_GlobalSettings.g.cs");
    }

    #[test]
    fn test_file_name_nested() {
        let mut declaration = Declaration::new("Tuning", "Tuning.cs").in_namespace("Game");
        declaration.enclosing.push(EnclosingType {
            name: "Gameplay".to_string(),
            keyword: TypeKeyword::Class,
            modifiers: Vec::new(),
        });
        assert_eq!(
            file_name(&target(declaration)),
            "Game_Gameplay.Tuning_GlobalSettings.g.cs"
        );
    }

    #[test]
    fn test_type_header() {
        let modifiers = vec!["public".to_string(), "static".to_string()];
        assert_eq!(
            type_header(&modifiers, TypeKeyword::Class, "Settings"),
            "public static partial class Settings"
        );
    }

    #[test]
    fn test_type_header_moves_partial() {
        let modifiers = vec!["partial".to_string(), "internal".to_string()];
        assert_eq!(
            type_header(&modifiers, TypeKeyword::RecordStruct, "Limits"),
            "internal partial record struct Limits"
        );
        assert_eq!(type_header(&[], TypeKeyword::Struct, "S"), "partial struct S");
    }
}
