use std::{collections::HashMap, path::Path};

use setgen_codegen::{
    builder::CodeBuilder,
    language::{Emitted, SettingsCodegen},
    pipeline::Diagnostic,
};
use setgen_core::{GENERATED_HEADER, SettingsBatch};
use setgen_manifest::{Manifest, Mode};
use setgen_scan::DeclarationTarget;

use crate::{
    accessor::{Access, Accessor, error_comment},
    naming::{file_name, type_header},
};

/// Default runtime lookup method for [`Mode::Indirect`].
pub const DEFAULT_LOOKUP: &str = "GetSetting";

/// C# accessor generator.
///
/// Every declaration becomes one partial type re-opening the container,
/// with one accessor per setting:
///
/// ```csharp
/// /// <summary>
/// /// [Source-Generated] Global setting. Player movement speed
/// /// </summary>
/// public const float SPEED = 2.5f;
/// ```
///
/// In [`Mode::Indirect`] accessors read the live value through the
/// container's lookup method instead of baking in the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitter {
    mode: Mode,
    lookup: String,
}

impl Emitter {
    pub fn new(mode: Mode, lookup: impl Into<String>) -> Self {
        Self {
            mode,
            lookup: lookup.into(),
        }
    }

    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self::new(manifest.project.mode, manifest.runtime.lookup.as_str())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn lookup(&self) -> &str {
        &self.lookup
    }

    fn access(&self) -> Access {
        match self.mode {
            Mode::Direct => Access::Const,
            Mode::Indirect => Access::Lookup(self.lookup.clone()),
        }
    }

    /// Open the namespace and every type block around the container.
    /// Returns the number of blocks opened.
    fn open_container(&self, builder: &mut CodeBuilder, target: &DeclarationTarget) -> usize {
        let mut opened = 0;
        builder.push_line(GENERATED_HEADER).push_blank();

        if let Some(namespace) = &target.namespace {
            builder.open_block(&format!("namespace {}", namespace));
            opened += 1;
        }
        for outer in &target.enclosing {
            builder.open_block(&type_header(&outer.modifiers, outer.keyword, &outer.name));
            opened += 1;
        }
        builder.open_block(&type_header(&target.modifiers, target.keyword, &target.name));
        opened + 1
    }

    fn close_container(builder: &mut CodeBuilder, opened: usize) {
        for _ in 0..opened {
            builder.close_block();
        }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(Mode::default(), DEFAULT_LOOKUP)
    }
}

impl SettingsCodegen for Emitter {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_name(&self, target: &DeclarationTarget) -> String {
        file_name(target)
    }

    fn emit(&self, target: &DeclarationTarget, batch: &SettingsBatch, origin: &Path) -> Emitted {
        let mut builder = CodeBuilder::csharp();
        let opened = self.open_container(&mut builder, target);
        builder
            .push_line(&format!("//From: {}", origin.display()))
            .push_line(&format!("//Detected Settings: {}", batch.len()));

        let access = self.access();
        let mut emitted = Emitted::default();
        let mut identifiers: HashMap<String, &str> = HashMap::new();

        for setting in batch.iter() {
            builder.push_blank();

            let checked = Accessor::check(setting, &target.name, &access).and_then(|accessor| {
                match identifiers.get(&accessor.identifier) {
                    Some(first) => Err(format!(
                        "setting name '{}' becomes '{}', already generated for '{}'",
                        setting.raw_name(),
                        accessor.identifier,
                        first
                    )),
                    None => Ok(accessor),
                }
            });

            match checked {
                Ok(accessor) => {
                    builder
                        .push_doc(&accessor.doc())
                        .push_line(&accessor.render(&access));
                    identifiers.insert(accessor.identifier, setting.raw_name());
                    emitted.accessors += 1;
                }
                Err(message) => {
                    tracing::warn!(
                        declaration = %target.display_name(),
                        setting = setting.raw_name(),
                        "{}",
                        message
                    );
                    builder.push_line(&error_comment(&message));
                    emitted
                        .diagnostics
                        .push(Diagnostic::warning("emit", message).at(setting.raw_name()));
                }
            }
        }

        Self::close_container(&mut builder, opened);
        emitted.content = builder.build();
        emitted
    }

    fn emit_failure(
        &self,
        target: &DeclarationTarget,
        origin: Option<&Path>,
        message: &str,
    ) -> String {
        let mut builder = CodeBuilder::csharp();
        let opened = self.open_container(&mut builder, target);
        match origin {
            Some(origin) => builder.push_line(&format!("//From: {}", origin.display())),
            None => builder.push_line(&format!("//From: {} (unresolved)", target.settings_path)),
        };
        builder.push_line(&error_comment(message));
        Self::close_container(&mut builder, opened);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use setgen_core::{Setting, SettingKind};
    use setgen_scan::{Attribute, AttributeArg, Declaration, scan};

    use super::*;

    fn target(declaration: Declaration) -> DeclarationTarget {
        let declaration = declaration.with_attribute(
            Attribute::new("GlobalSettings")
                .with_arg(AttributeArg::String("Settings.asset".to_string())),
        );
        scan(&[declaration], "GlobalSettings").remove(0)
    }

    fn batch(settings: &[(SettingKind, &str, &str)]) -> SettingsBatch {
        let mut batch = SettingsBatch::new();
        for (kind, name, literal) in settings {
            batch.push(Setting::new(*kind, *name, "", *literal));
        }
        batch
    }

    #[test]
    fn test_emit_global_namespace() {
        let target = target(
            Declaration::new("Settings", "Settings.cs").with_modifiers(&["public", "static", "partial"]),
        );
        let batch = batch(&[(SettingKind::Float, "Test Setting", "2.5f")]);

        let emitted = Emitter::default().emit(&target, &batch, Path::new("/game/Settings.asset"));

        assert_eq!(emitted.accessors, 1);
        assert!(emitted.diagnostics.is_empty());
        assert_eq!(
            emitted.content,
            "\
// <auto-generated />

public static partial class Settings {
    //From: /game/Settings.asset
    //Detected Settings: 1

    /// <summary>
    /// [Source-Generated] Global setting.
    /// </summary>
    public const float TEST_SETTING = 2.5f;
}
"
        );
    }

    #[test]
    fn test_emit_indirect() {
        let target = target(Declaration::new("Settings", "Settings.cs").in_namespace("Game"));
        let batch = batch(&[(SettingKind::Bool, "Debug.Enabled", "true")]);

        let emitter = Emitter::new(Mode::Indirect, "Runtime.Get");
        let emitted = emitter.emit(&target, &batch, Path::new("/game/Settings.asset"));

        assert!(emitted.content.contains("namespace Game {\n    partial class Settings {\n"));
        assert!(
            emitted
                .content
                .contains(r#"        public static bool DEBUG_ENABLED => Runtime.Get<bool>("Debug.Enabled");"#)
        );
        assert!(!emitted.content.contains("const"));
    }

    #[test]
    fn test_indirect_keeps_values_that_are_not_literals() {
        let target = target(Declaration::new("Settings", "Settings.cs"));
        let batch = batch(&[
            (SettingKind::Float, "Max Speed", "Infinityf"),
            (SettingKind::Int, "Big", "3000000000"),
        ]);
        let origin = Path::new("/game/Settings.asset");

        let indirect = Emitter::new(Mode::Indirect, "GetSetting").emit(&target, &batch, origin);
        assert_eq!(indirect.accessors, 2);
        assert!(indirect.diagnostics.is_empty());
        assert!(!indirect.content.contains("/*Error"));
        assert!(
            indirect
                .content
                .contains(r#"public static float MAX_SPEED => GetSetting<float>("Max Speed");"#)
        );
        assert!(
            indirect
                .content
                .contains(r#"public static int BIG => GetSetting<int>("Big");"#)
        );

        let direct = Emitter::default().emit(&target, &batch, origin);
        assert_eq!(direct.accessors, 0);
        assert_eq!(direct.diagnostics.len(), 2);
    }

    #[test]
    fn test_invalid_setting_becomes_error_comment() {
        let target = target(Declaration::new("Settings", "Settings.cs"));
        let batch = batch(&[
            (SettingKind::Int, "2nd Place", "1"),
            (SettingKind::Int, "Lives", "3"),
        ]);

        let emitted = Emitter::default().emit(&target, &batch, Path::new("/game/Settings.asset"));

        assert_eq!(emitted.accessors, 1);
        assert_eq!(emitted.diagnostics.len(), 1);
        assert_eq!(emitted.diagnostics[0].location.as_deref(), Some("2nd Place"));
        assert!(emitted.content.contains("    /*Error: setting name '2nd Place' becomes '2ND_PLACE'"));
        assert!(emitted.content.contains("    public const int LIVES = 3;"));
        assert!(emitted.content.contains("//Detected Settings: 2"));
    }

    #[test]
    fn test_identifier_collision() {
        let target = target(Declaration::new("Settings", "Settings.cs"));
        let batch = batch(&[
            (SettingKind::Int, "maxPlayers", "16"),
            (SettingKind::Int, "max players", "8"),
        ]);

        let emitted = Emitter::default().emit(&target, &batch, Path::new("/game/Settings.asset"));

        assert_eq!(emitted.accessors, 1);
        assert!(emitted.content.contains("public const int MAX_PLAYERS = 16;"));
        assert!(emitted.content.contains("already generated for 'maxPlayers'"));
    }

    #[test]
    fn test_emit_failure() {
        let target = target(Declaration::new("Settings", "Settings.cs").in_namespace("Game"));

        let content = Emitter::default().emit_failure(&target, None, "settings file not found");
        assert_eq!(
            content,
            "\
// <auto-generated />

namespace Game {
    partial class Settings {
        //From: Settings.asset (unresolved)
        /*Error: settings file not found*/
    }
}
"
        );

        let content = Emitter::default().emit_failure(
            &target,
            Some(Path::new("/game/Settings.asset")),
            "No parameters found",
        );
        assert!(content.contains("//From: /game/Settings.asset\n"));
        assert!(!content.contains("const"));
    }

    #[test]
    fn test_from_manifest() {
        let mut manifest = Manifest::default();
        manifest.project.mode = Mode::Indirect;
        manifest.runtime.lookup = "Lookup".to_string();

        let emitter = Emitter::from_manifest(&manifest);
        assert_eq!(emitter.mode(), Mode::Indirect);
        assert_eq!(emitter.lookup(), "Lookup");
        assert_eq!(Emitter::default().lookup(), DEFAULT_LOOKUP);
    }
}
