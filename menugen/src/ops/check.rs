//! Check operation - manifest validation and a dry plan.

use std::path::Path;

use menugen_codegen::{Emitter, GenerationConfig, Generator, ManifestSource, UNITY_CSHARP};
use menugen_manifest::ManifestFile;

use crate::reports::{CheckEntry, CheckReport, EntryStatus};

/// Execute the check operation.
///
/// The manifest has already been parsed and validated by the time this runs;
/// what remains is to show how each tagged type would be treated.
pub fn check(file: &ManifestFile, config_path: &Path) -> CheckReport {
    let config = GenerationConfig::from(file);
    let source = ManifestSource::new(file.manifest());
    let plan = Generator::new(&config, &source).plan();
    let emitter = Emitter::new(&UNITY_CSHARP);

    let mut entries = Vec::with_capacity(
        plan.entries.len() + plan.rejected.len() + plan.exhausted.len(),
    );

    for resolved in &plan.entries {
        let menu = emitter.menu_entry(resolved, &config);
        entries.push(CheckEntry {
            type_name: resolved.candidate.ty.full_name.clone(),
            status: EntryStatus::Generated {
                identifier: resolved.identifier.clone(),
                menu_path: menu.menu_path,
                priority: menu.priority,
            },
        });
    }
    for rejected in &plan.rejected {
        entries.push(CheckEntry {
            type_name: rejected.candidate.ty.full_name.clone(),
            status: EntryStatus::Excluded {
                reason: rejected.rejection.to_string(),
            },
        });
    }
    for candidate in &plan.exhausted {
        entries.push(CheckEntry {
            type_name: candidate.ty.full_name.clone(),
            status: EntryStatus::Skipped,
        });
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        output: config.output,
        base_type: config.base_type,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_classifies_types() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("menugen.toml");
        fs::write(
            &path,
            r#"
[generator]
output = "Menu.g.cs"

[types."Game.Item"]
extends = "UnityEngine.ScriptableObject"
abstract = true
menu = {}

[types."A.Sword"]
extends = "Game.Item"
menu = { order = 4 }

[types."Sword"]
extends = "Game.Item"
menu = {}

[types."B.Sword"]
extends = "Game.Item"
menu = {}
"#,
        )
        .unwrap();
        let file = ManifestFile::open(&path).unwrap();

        let report = check(&file, &path);

        assert_eq!(report.generated_count(), 2);
        assert_eq!(report.entries.len(), 4);
        assert!(matches!(
            &report.entries[0].status,
            EntryStatus::Generated { identifier, priority: 4, .. } if identifier == "Sword"
        ));
        assert!(report.entries.iter().any(|e| e.type_name == "Game.Item"
            && matches!(e.status, EntryStatus::Excluded { .. })));
        assert!(report.entries.iter().any(|e| e.type_name == "Sword"
            && matches!(e.status, EntryStatus::Skipped)));
        assert!(!temp.path().join("Menu.g.cs").exists());
    }
}
