//! Manifest types and parsing for menugen.toml files.

mod file;
mod generator;
mod parse;
mod registry;
mod validate;

use indexmap::IndexMap;
use serde::Deserialize;
use toml::Spanned;

pub use file::ManifestFile;
pub use generator::{DEFAULT_BASE_TYPE, GeneratorConfig};
pub use validate::ParseContext;

/// Root manifest for menugen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generation settings
    pub generator: GeneratorConfig,

    /// Type registry, in document order
    #[serde(default)]
    pub types: IndexMap<String, TypeDecl>,
}

/// A type declared in the `[types]` registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    /// Assembly the type is compiled into
    pub assembly: Option<String>,

    /// Fully-qualified name of the direct base type
    pub extends: Option<Spanned<String>>,

    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    /// Unbound generic template
    #[serde(default, rename = "generic")]
    pub is_generic: bool,

    #[serde(default = "default_public", rename = "public")]
    pub is_public: bool,

    /// Present when the type is tagged for a create-asset menu entry
    pub menu: Option<MenuDecl>,
}

fn default_public() -> bool {
    true
}

impl TypeDecl {
    /// Direct base type name, if any.
    pub fn base(&self) -> Option<&str> {
        self.extends.as_ref().map(|s| s.get_ref().as_str())
    }

    /// Whether this type carries menu metadata.
    pub fn is_tagged(&self) -> bool {
        self.menu.is_some()
    }
}

/// Per-type menu metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuDecl {
    /// Prepended to the resolved base name
    #[serde(default)]
    pub prefix: String,

    /// Appended to the resolved base name
    #[serde(default)]
    pub suffix: String,

    /// Menu priority for this entry, overriding `[generator].order`
    pub order: Option<i64>,
}
