//! End-to-end generation from a menugen.toml on disk.

use std::fs;

use menugen_codegen::{GenerateError, GenerationConfig, Generator, ManifestSource, Rejection};
use menugen_core::WriteOutcome;
use menugen_manifest::ManifestFile;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[generator]
output = "Assets/Editor/Menu.g.cs"
order = 100

[types."UnityEngine.ScriptableObject"]
assembly = "UnityEngine.CoreModule"

[types."Game.Items.Item"]
assembly = "Assembly-CSharp"
extends = "UnityEngine.ScriptableObject"
abstract = true
menu = {}

[types."A.Sword"]
assembly = "Assembly-CSharp"
extends = "Game.Items.Item"
menu = {}

[types."B.Sword"]
assembly = "Assembly-CSharp"
extends = "Game.Items.Item"
menu = { order = 5 }

[types."Game.Inventory+Slot"]
assembly = "Assembly-CSharp"
extends = "UnityEngine.ScriptableObject"
menu = { prefix = "Inventory/" }
"#;

fn write_manifest(temp: &TempDir, content: &str) -> ManifestFile {
    let path = temp.path().join("menugen.toml");
    fs::write(&path, content).unwrap();
    ManifestFile::open(&path).unwrap()
}

#[test]
fn generates_menu_from_manifest() {
    let temp = TempDir::new().unwrap();
    let file = write_manifest(&temp, MANIFEST);
    let config = GenerationConfig::from(&file);
    let source = ManifestSource::new(file.manifest());

    let report = Generator::new(&config, &source).run().unwrap();

    assert_eq!(report.outcome, Some(WriteOutcome::Written));
    assert_eq!(report.output, temp.path().join("Assets/Editor/Menu.g.cs"));
    assert_eq!(report.count(), 3);

    let identifiers: Vec<_> = report
        .plan
        .entries
        .iter()
        .map(|e| e.identifier.as_str())
        .collect();
    assert_eq!(identifiers, ["Sword", "B.Sword", "Inventory/Slot"]);

    assert_eq!(report.plan.rejected.len(), 1);
    assert_eq!(report.plan.rejected[0].rejection, Rejection::Abstract);

    let text = fs::read_to_string(&report.output).unwrap();
    assert!(text.contains("[UnityEditor.MenuItem(\"Assets/Create/Sword\", priority = 100)]"));
    assert!(text.contains("[UnityEditor.MenuItem(\"Assets/Create/B.Sword\", priority = 5)]"));
    assert!(text.contains("typeof(Game.Inventory.Slot)"));
    assert!(text.contains("// Menu item for 'A.Sword, Assembly-CSharp'"));
    assert!(!text.contains("Game.Items.Item"));
}

#[test]
fn entries_appear_in_resolution_order() {
    let temp = TempDir::new().unwrap();
    let file = write_manifest(&temp, MANIFEST);
    let config = GenerationConfig::from(&file);
    let source = ManifestSource::new(file.manifest());

    let report = Generator::new(&config, &source).run().unwrap();
    let text = fs::read_to_string(&report.output).unwrap();

    let first = text.find("_Generate0()").unwrap();
    let second = text.find("_Generate1()").unwrap();
    let third = text.find("_Generate2()").unwrap();
    assert!(first < second && second < third);
    assert!(text.find("typeof(A.Sword)").unwrap() < second);
}

#[test]
fn regenerating_is_stable() {
    let temp = TempDir::new().unwrap();
    let file = write_manifest(&temp, MANIFEST);
    let config = GenerationConfig::from(&file);
    let source = ManifestSource::new(file.manifest());
    let generator = Generator::new(&config, &source);

    let first = generator.run().unwrap();
    let before = fs::read(&first.output).unwrap();
    let second = generator.run().unwrap();

    assert_eq!(second.outcome, Some(WriteOutcome::Unchanged));
    assert_eq!(fs::read(&second.output).unwrap(), before);
}

#[test]
fn untagged_manifest_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let file = write_manifest(
        &temp,
        r#"
[generator]
output = "Menu.g.cs"

[types."Game.Config"]
extends = "UnityEngine.ScriptableObject"
"#,
    );
    let config = GenerationConfig::from(&file);
    let source = ManifestSource::new(file.manifest());

    let report = Generator::new(&config, &source).run().unwrap();

    assert_eq!(report.count(), 0);
    assert_eq!(report.outcome, None);
    assert!(!temp.path().join("Menu.g.cs").exists());
}

#[test]
fn missing_output_dir_without_create_dirs_fails() {
    let temp = TempDir::new().unwrap();
    let file = write_manifest(
        &temp,
        r#"
[generator]
output = "Missing/Menu.g.cs"
create_dirs = false

[types."Game.Config"]
extends = "UnityEngine.ScriptableObject"
menu = {}
"#,
    );
    let config = GenerationConfig::from(&file);
    let source = ManifestSource::new(file.manifest());

    let err = Generator::new(&config, &source).run().unwrap_err();

    assert!(matches!(err, GenerateError::InvalidOutputPath(_)));
    assert!(!temp.path().join("Missing").exists());
}
