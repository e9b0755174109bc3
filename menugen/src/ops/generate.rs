//! Generate operation - the create-asset menu run.

use std::path::PathBuf;

use menugen_codegen::{
    GenerateError, GenerationConfig, Generator, ManifestSource, Plan, ResolvedCandidate,
};
use menugen_core::WriteOutcome;
use menugen_manifest::ManifestFile;

use crate::reports::{GenerateReport, GenerateResult, GeneratedEntry};

/// Command-line values that take precedence over `[generator]`.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub order: Option<i64>,
}

impl Overrides {
    pub fn apply(&self, mut config: GenerationConfig) -> GenerationConfig {
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            config.suffix = suffix.clone();
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        config
    }
}

/// Execute the generate operation.
///
/// With `dry_run` the file system is not touched and the report carries
/// the text that would have been written. The output path is still checked,
/// so a dry run fails wherever the real run would.
pub fn generate(
    file: &ManifestFile,
    overrides: &Overrides,
    dry_run: bool,
) -> Result<GenerateReport, GenerateError> {
    let config = overrides.apply(GenerationConfig::from(file));
    let source = ManifestSource::new(file.manifest());
    let generator = Generator::new(&config, &source);

    if dry_run {
        generator.check_output()?;
        let plan = generator.plan();
        let result = if plan.is_empty() {
            GenerateResult::NothingToGenerate
        } else {
            GenerateResult::Preview {
                content: generator.emit(&plan),
            }
        };
        return Ok(build_report(config.output.clone(), plan, result));
    }

    let report = generator.run()?;
    let result = match report.outcome {
        Some(WriteOutcome::Written) => GenerateResult::Written,
        Some(WriteOutcome::Unchanged) => GenerateResult::Unchanged,
        None => GenerateResult::NothingToGenerate,
    };
    Ok(build_report(report.output, report.plan, result))
}

fn build_report(output: PathBuf, plan: Plan, result: GenerateResult) -> GenerateReport {
    GenerateReport {
        output,
        entries: plan.entries.iter().map(entry).collect(),
        diagnostics: plan.diagnostics,
        result,
    }
}

fn entry(resolved: &ResolvedCandidate) -> GeneratedEntry {
    GeneratedEntry {
        identifier: resolved.identifier.clone(),
        type_name: resolved.candidate.ty.full_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
[generator]
output = "Menu.g.cs"
order = 10

[types."Game.Sword"]
extends = "UnityEngine.ScriptableObject"
menu = {}
"#;

    fn open(temp: &TempDir) -> ManifestFile {
        let path = temp.path().join("menugen.toml");
        fs::write(&path, MANIFEST).unwrap();
        ManifestFile::open(&path).unwrap()
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = Overrides {
            output: Some(PathBuf::from("Other.cs")),
            prefix: Some("X_".into()),
            suffix: None,
            order: Some(3),
        };
        let config = overrides.apply(GenerationConfig::new("Menu.cs").with_affixes("A", "B"));

        assert_eq!(config.output, PathBuf::from("Other.cs"));
        assert_eq!(config.prefix, "X_");
        assert_eq!(config.suffix, "B");
        assert_eq!(config.order, 3);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp);

        let report = generate(&file, &Overrides::default(), true).unwrap();

        assert!(matches!(report.result, GenerateResult::Preview { .. }));
        assert_eq!(report.entries.len(), 1);
        assert!(!temp.path().join("Menu.g.cs").exists());
    }

    #[test]
    fn test_dry_run_rejects_invalid_output() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp);
        fs::write(temp.path().join("blocker"), "not a dir").unwrap();
        let overrides = Overrides {
            output: Some(temp.path().join("blocker").join("Menu.g.cs")),
            ..Overrides::default()
        };

        let err = generate(&file, &overrides, true).unwrap_err();

        assert!(matches!(err, GenerateError::InvalidOutputPath(_)));
    }

    #[test]
    fn test_generate_then_unchanged() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp);

        let first = generate(&file, &Overrides::default(), false).unwrap();
        let second = generate(&file, &Overrides::default(), false).unwrap();

        assert!(matches!(first.result, GenerateResult::Written));
        assert!(matches!(second.result, GenerateResult::Unchanged));
        assert_eq!(first.entries[0].identifier, "Sword");
    }
}
