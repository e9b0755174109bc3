use std::path::PathBuf;

use serde::Deserialize;

/// Base type assumed when `[generator].base_type` is omitted.
pub const DEFAULT_BASE_TYPE: &str = "UnityEngine.ScriptableObject";

/// The `[generator]` section of menugen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// File the generated menu source is written to
    pub output: PathBuf,

    /// Menu priority for every generated entry
    #[serde(default)]
    pub order: i64,

    /// Prepended to every generated identifier
    #[serde(default)]
    pub prefix: String,

    /// Appended to every generated identifier
    #[serde(default)]
    pub suffix: String,

    /// Types must derive from this type to be generated
    #[serde(default = "default_base_type")]
    pub base_type: String,

    /// Create missing output directories
    #[serde(default = "default_create_dirs")]
    pub create_dirs: bool,
}

fn default_base_type() -> String {
    DEFAULT_BASE_TYPE.to_string()
}

fn default_create_dirs() -> bool {
    true
}
