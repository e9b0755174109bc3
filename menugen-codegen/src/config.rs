//! Run-scoped generation settings.

use std::path::PathBuf;

use menugen_core::DirPolicy;
use menugen_manifest::{DEFAULT_BASE_TYPE, GeneratorConfig, ManifestFile};

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Menu priority for entries without their own `order`.
    pub order: i64,
    pub prefix: String,
    pub suffix: String,
    pub output: PathBuf,
    /// Candidates must strictly derive from this type.
    pub base_type: String,
    pub dir_policy: DirPolicy,
}

impl GenerationConfig {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            order: 0,
            prefix: String::new(),
            suffix: String::new(),
            output: output.into(),
            base_type: DEFAULT_BASE_TYPE.to_string(),
            dir_policy: DirPolicy::Create,
        }
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = base_type.into();
        self
    }

    pub fn with_dir_policy(mut self, policy: DirPolicy) -> Self {
        self.dir_policy = policy;
        self
    }

    /// Build from a `[generator]` section, keeping `output` as written.
    pub fn from_generator(generator: &GeneratorConfig) -> Self {
        Self {
            order: generator.order,
            prefix: generator.prefix.clone(),
            suffix: generator.suffix.clone(),
            output: generator.output.clone(),
            base_type: generator.base_type.clone(),
            dir_policy: if generator.create_dirs {
                DirPolicy::Create
            } else {
                DirPolicy::RequireExisting
            },
        }
    }
}

impl From<&ManifestFile> for GenerationConfig {
    /// The output path is resolved against the manifest's directory.
    fn from(file: &ManifestFile) -> Self {
        Self {
            output: file.output_path(),
            ..Self::from_generator(&file.manifest().generator)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use menugen_manifest::Manifest;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::new("Menu.cs");
        assert_eq!(config.order, 0);
        assert_eq!(config.prefix, "");
        assert_eq!(config.suffix, "");
        assert_eq!(config.base_type, "UnityEngine.ScriptableObject");
        assert_eq!(config.dir_policy, DirPolicy::Create);
    }

    #[test]
    fn test_from_generator() {
        let manifest = Manifest::from_str(
            r#"
            [generator]
            output = "Gen/Menu.cs"
            order = 4
            prefix = "X_"
            suffix = "_Y"
            base_type = "Game.Asset"
            create_dirs = false
            "#,
        )
        .unwrap();

        let config = GenerationConfig::from_generator(&manifest.generator);

        assert_eq!(
            config,
            GenerationConfig::new("Gen/Menu.cs")
                .with_order(4)
                .with_affixes("X_", "_Y")
                .with_base_type("Game.Asset")
                .with_dir_policy(DirPolicy::RequireExisting)
        );
    }
}
