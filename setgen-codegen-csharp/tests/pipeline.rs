//! The C# emitter driven by the compilation pipeline over files on disk.

use std::fs;

use setgen_codegen::pipeline::{Pipeline, PipelineOptions, Severity};
use setgen_codegen_csharp::Emitter;
use setgen_manifest::Mode;
use setgen_scan::load_declarations;
use tempfile::TempDir;

const ASSET: &str = include_str!("fixtures/GlobalSettingsContainer.asset");

#[test]
fn test_project_compiles_to_one_file_per_container() {
    let temp = TempDir::new().unwrap();
    let scripts = temp.path().join("Assets/Scripts");
    fs::create_dir_all(&scripts).unwrap();
    fs::write(scripts.join("GlobalSettingsContainer.asset"), ASSET).unwrap();
    fs::write(
        scripts.join("Settings.cs"),
        "[GlobalSettings(\"GlobalSettingsContainer.asset\")]\npublic static partial class Settings { }\n",
    )
    .unwrap();
    fs::write(
        scripts.join("Audio.cs"),
        "namespace Game.Audio;\n[GlobalSettings(\"Audio.asset\")]\npublic static partial class Mixer { }\n",
    )
    .unwrap();

    let declarations = load_declarations(&[temp.path().join("Assets")]).unwrap();
    let pipeline = Pipeline::new(PipelineOptions::default(), Emitter::new(Mode::Indirect, "GetSetting"));
    let compilation = pipeline.run(&declarations);

    let names: Vec<_> = compilation.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Game.Audio_Mixer_GlobalSettings.g.cs",
            "global_Settings_GlobalSettings.g.cs"
        ]
    );

    let mixer = compilation.file("Game.Audio_Mixer_GlobalSettings.g.cs").unwrap();
    assert!(mixer.failed);
    assert!(mixer.content.contains("namespace Game.Audio {"));
    assert!(mixer.content.contains("/*Error: settings file not found"));

    let settings = compilation.file("global_Settings_GlobalSettings.g.cs").unwrap();
    assert!(!settings.failed);
    assert_eq!(settings.accessors, 4);
    assert!(
        settings
            .content
            .contains(r#"public static int MAX_PLAYERS => GetSetting<int>("maxPlayers");"#)
    );

    let errors: Vec<_> = compilation
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].location.as_deref(), Some("Game.Audio.Mixer"));
}

#[test]
fn test_unchanged_output_is_not_rewritten() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Settings.asset"), ASSET).unwrap();
    fs::write(
        temp.path().join("Settings.cs"),
        "[GlobalSettings(\"Settings.asset\")] static partial class Settings { }",
    )
    .unwrap();

    let declarations = load_declarations(&[temp.path().to_path_buf()]).unwrap();
    let pipeline = Pipeline::new(PipelineOptions::default(), Emitter::default());
    let output = temp.path().join("Generated");

    let first = pipeline.run(&declarations).write(&output).unwrap();
    let second = pipeline.run(&declarations).write(&output).unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].result, setgen_core::WriteResult::Written);
    assert_eq!(second[0].result, setgen_core::WriteResult::Unchanged);
}
