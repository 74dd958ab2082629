//! Pipeline orchestrator.

use std::collections::HashSet;

use setgen_asset::{AssetFormat, SettingsSource, reconstruct_source, resolve};
use setgen_manifest::Manifest;
use setgen_scan::{Declaration, DeclarationTarget, scan};

use super::{Compilation, Diagnostic, GENERATED_SUFFIX, GeneratedFile};
use crate::language::SettingsCodegen;

/// Settings the pipeline needs from the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Attribute simple name marking settings containers.
    pub attribute: String,
    /// Layout of settings-definition files.
    pub format: AssetFormat,
}

impl PipelineOptions {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            attribute: manifest.project.attribute.clone(),
            format: manifest.format.clone(),
        }
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::from_manifest(&Manifest::default())
    }
}

/// The compilation pipeline orchestrator.
///
/// For every declaration carrying the settings attribute the pipeline
/// resolves its settings file, reconstructs the records and hands them to
/// the target-language codegen. Each declaration yields exactly one
/// generated file, even when one of those steps fails.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(PipelineOptions::default(), Emitter::default());
/// let compilation = pipeline.run(&declarations);
/// compilation.write(&output_dir)?;
/// ```
pub struct Pipeline {
    options: PipelineOptions,
    codegen: Box<dyn SettingsCodegen>,
}

impl Pipeline {
    pub fn new(options: PipelineOptions, codegen: impl SettingsCodegen + 'static) -> Self {
        Self {
            options,
            codegen: Box::new(codegen),
        }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Run the pipeline over every declaration in the compilation.
    pub fn run(&self, declarations: &[Declaration]) -> Compilation {
        let targets = scan(declarations, &self.options.attribute);
        tracing::debug!(
            language = self.codegen.language(),
            targets = targets.len(),
            "found settings containers"
        );

        let mut compilation = Compilation::default();
        let mut taken = HashSet::new();

        for target in &targets {
            let mut file = self.compile(target, &mut compilation.diagnostics);
            let preferred = file.name.clone();
            file.name = disambiguate(&preferred, &taken);
            if file.name != preferred {
                tracing::warn!(
                    declaration = %file.declaration,
                    file = %preferred,
                    renamed = %file.name,
                    "output file name collision"
                );
                compilation.diagnostics.push(
                    Diagnostic::warning(
                        "emit",
                        format!("{} is already generated; writing {}", preferred, file.name),
                    )
                    .at(&file.declaration),
                );
            }
            taken.insert(file.name.clone());
            compilation.files.push(file);
        }

        compilation.files.sort_by(|a, b| a.name.cmp(&b.name));
        compilation
    }

    /// Compile one declaration, recording diagnostics into `diagnostics`.
    fn compile(&self, target: &DeclarationTarget, diagnostics: &mut Vec<Diagnostic>) -> GeneratedFile {
        let declaration = target.display_name();
        let mut file = GeneratedFile {
            name: self.codegen.file_name(target),
            content: String::new(),
            declaration: declaration.clone(),
            source: target.file.clone(),
            origin: None,
            accessors: 0,
            failed: true,
        };

        let source = match resolve(&target.file, &target.settings_path) {
            Ok(source) => source,
            Err(err) => {
                let message = err.to_string();
                tracing::debug!(declaration = %declaration, error = %message, "resolution failed");
                diagnostics.push(Diagnostic::error("resolve", &message).at(&declaration));
                file.content = self.codegen.emit_failure(target, None, &message);
                return file;
            }
        };
        file.origin = Some(source.path.clone());

        self.emit_source(target, &source, file, diagnostics)
    }

    fn emit_source(
        &self,
        target: &DeclarationTarget,
        source: &SettingsSource,
        mut file: GeneratedFile,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> GeneratedFile {
        let batch = match reconstruct_source(source, &self.options.format) {
            Ok(batch) => batch,
            Err(err) => {
                let message = err.to_string();
                diagnostics.push(Diagnostic::error("reconstruct", &message).at(&file.declaration));
                file.content = self
                    .codegen
                    .emit_failure(target, Some(&source.path), &message);
                return file;
            }
        };

        let emitted = self.codegen.emit(target, &batch, &source.path);
        diagnostics.extend(
            emitted
                .diagnostics
                .into_iter()
                .map(|diag| diag.within(&file.declaration)),
        );
        diagnostics.push(
            Diagnostic::info(
                "emit",
                format!("generated {} of {} settings", emitted.accessors, batch.len()),
            )
            .at(&file.declaration),
        );

        file.content = emitted.content;
        file.accessors = emitted.accessors;
        file.failed = false;
        file
    }
}

/// Append `_2`, `_3`, ... before the generated suffix until the name is free.
fn disambiguate(name: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(name) {
        return name.to_string();
    }

    let stem = name.strip_suffix(GENERATED_SUFFIX).unwrap_or(name);
    let suffix = if stem.len() < name.len() { GENERATED_SUFFIX } else { "" };
    (2..)
        .map(|n| format!("{}_{}{}", stem, n, suffix))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use setgen_core::SettingsBatch;
    use setgen_scan::{Attribute, AttributeArg};
    use tempfile::TempDir;

    use super::*;
    use crate::language::Emitted;

    /// Emits one line per setting so tests can see what reached the codegen.
    struct ListCodegen;

    impl SettingsCodegen for ListCodegen {
        fn language(&self) -> &'static str {
            "list"
        }

        fn file_name(&self, target: &DeclarationTarget) -> String {
            format!("{}.g.cs", target.name)
        }

        fn emit(&self, _target: &DeclarationTarget, batch: &SettingsBatch, _origin: &Path) -> Emitted {
            let mut emitted = Emitted::default();
            for setting in batch.iter() {
                if setting.raw_name().is_empty() {
                    emitted
                        .diagnostics
                        .push(Diagnostic::warning("emit", "empty name").at("(empty)"));
                    continue;
                }
                emitted
                    .content
                    .push_str(&format!("{}={}\n", setting.raw_name(), setting.literal_value()));
                emitted.accessors += 1;
            }
            emitted
        }

        fn emit_failure(
            &self,
            _target: &DeclarationTarget,
            _origin: Option<&Path>,
            message: &str,
        ) -> String {
            format!("/*Error: {}*/\n", message)
        }
    }

    const ASSET: &str = "\
MonoBehaviour:
  settings:
  - <SettingName>k__BackingField: Speed
    <SettingType>k__BackingField: 2
    <FloatValue>k__BackingField: 2.5
  - <SettingName>k__BackingField:
    <SettingType>k__BackingField: 1
";

    fn container(dir: &Path, name: &str, asset: &str) -> Declaration {
        Declaration::new(name, dir.join(format!("{}.cs", name))).with_attribute(
            Attribute::new("GlobalSettings").with_arg(AttributeArg::String(asset.to_string())),
        )
    }

    fn pipeline() -> Pipeline {
        Pipeline::new(PipelineOptions::default(), ListCodegen)
    }

    #[test]
    fn test_options_from_manifest() {
        let mut manifest = Manifest::default();
        manifest.project.attribute = "Tunables".to_string();
        let options = PipelineOptions::from_manifest(&manifest);
        assert_eq!(options.attribute, "Tunables");
        assert_eq!(options.format, AssetFormat::default());
    }

    #[test]
    fn test_run_emits_settings() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Settings.asset"), ASSET).unwrap();

        let compilation = pipeline().run(&[container(temp.path(), "Settings", "Settings.asset")]);

        assert!(!compilation.has_errors());
        assert_eq!(compilation.warning_count(), 1);
        let file = compilation.file("Settings.g.cs").unwrap();
        assert_eq!(file.content, "Speed=2.5f\n");
        assert_eq!(file.accessors, 1);
        assert!(!file.failed);
        assert_eq!(file.origin.as_deref(), Some(temp.path().join("Settings.asset").as_path()));

        let warning = compilation
            .diagnostics
            .iter()
            .find(|d| d.severity.is_warning())
            .unwrap();
        assert_eq!(warning.location.as_deref(), Some("Settings: (empty)"));
    }

    #[test]
    fn test_failures_are_isolated() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Good.asset"), ASSET).unwrap();
        fs::write(temp.path().join("Broken.asset"), "no marker here").unwrap();

        let compilation = pipeline().run(&[
            container(temp.path(), "Missing", "Missing.asset"),
            container(temp.path(), "Broken", "Broken.asset"),
            container(temp.path(), "Good", "Good.asset"),
        ]);

        assert_eq!(compilation.files.len(), 3);
        assert_eq!(compilation.error_count(), 2);

        let missing = compilation.file("Missing.g.cs").unwrap();
        assert!(missing.failed);
        assert!(missing.origin.is_none());
        assert!(missing.content.starts_with("/*Error: settings file not found"));

        let broken = compilation.file("Broken.g.cs").unwrap();
        assert!(broken.failed);
        assert!(broken.origin.is_some());
        assert_eq!(broken.content, "/*Error: settings marker 'settings:' not found*/\n");

        let good = compilation.file("Good.g.cs").unwrap();
        assert!(!good.failed);
        assert_eq!(good.content, "Speed=2.5f\n");

        let phases: Vec<_> = compilation
            .diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .map(|d| (d.phase.as_str(), d.location.as_deref()))
            .collect();
        assert_eq!(
            phases,
            [("resolve", Some("Missing")), ("reconstruct", Some("Broken"))]
        );
    }

    #[test]
    fn test_undecorated_declarations_are_ignored() {
        let temp = TempDir::new().unwrap();
        let compilation = pipeline().run(&[Declaration::new("Player", temp.path().join("Player.cs"))]);
        assert!(compilation.files.is_empty());
        assert!(compilation.diagnostics.is_empty());
    }

    #[test]
    fn test_collisions_are_disambiguated() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();
        fs::write(temp.path().join("a/Settings.asset"), ASSET).unwrap();
        fs::write(temp.path().join("b/Settings.asset"), ASSET).unwrap();

        let compilation = pipeline().run(&[
            container(&temp.path().join("a"), "Settings", "Settings.asset"),
            container(&temp.path().join("b"), "Settings", "Settings.asset"),
        ]);

        let names: Vec<_> = compilation.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Settings.g.cs", "Settings_2.g.cs"]);
        assert_eq!(
            compilation.file("Settings_2.g.cs").unwrap().source,
            temp.path().join("b/Settings.cs")
        );
        assert!(
            compilation
                .diagnostics
                .iter()
                .any(|d| d.severity.is_warning() && d.message.contains("Settings_2.g.cs"))
        );
    }

    #[test]
    fn test_output_is_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Settings.asset"), ASSET).unwrap();

        let compilation = pipeline().run(&[
            container(temp.path(), "Zeta", "Settings.asset"),
            container(temp.path(), "Alpha", "Settings.asset"),
        ]);

        let names: Vec<_> = compilation.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Alpha.g.cs", "Zeta.g.cs"]);
    }

    #[test]
    fn test_disambiguate() {
        let mut taken = HashSet::new();
        assert_eq!(disambiguate("a.g.cs", &taken), "a.g.cs");

        taken.insert("a.g.cs".to_string());
        taken.insert("a_2.g.cs".to_string());
        assert_eq!(disambiguate("a.g.cs", &taken), "a_3.g.cs");

        taken.insert("plain".to_string());
        assert_eq!(disambiguate("plain", &taken), "plain_2");
    }
}
