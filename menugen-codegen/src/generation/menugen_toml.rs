//! Starter menugen.toml written by `menugen init`.

use std::path::{Path, PathBuf};

use menugen_manifest::DEFAULT_BASE_TYPE;

/// The menugen.toml configuration file.
pub struct MenugenToml {
    pub output: String,
    pub order: i64,
    pub base_type: String,
}

impl MenugenToml {
    pub const FILE_NAME: &'static str = "menugen.toml";

    pub fn new() -> Self {
        Self {
            output: "Assets/Editor/CreateItemMenu.g.cs".to_string(),
            order: 0,
            base_type: DEFAULT_BASE_TYPE.to_string(),
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::FILE_NAME)
    }

    pub fn render(&self) -> String {
        format!(
            r#"[generator]
output = {output}
order = {order}
prefix = ""
suffix = ""
base_type = {base}

# Declare the asset types of your project. Every type needs an ancestor
# chain that reaches the base type through `extends`.
#
# A `menu` table tags the type for generation. Untagged types are only
# used to resolve inheritance.

[types.{base}]
assembly = "UnityEngine.CoreModule"

[types."Game.Items.Item"]
assembly = "Assembly-CSharp"
extends = {base}
abstract = true

[types."Game.Items.Sword"]
assembly = "Assembly-CSharp"
extends = "Game.Items.Item"
menu = {{ prefix = "Items/" }}
"#,
            output = toml_string(&self.output),
            order = self.order,
            base = toml_string(&self.base_type),
        )
    }
}

/// Quote `value` as a TOML string.
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Default for MenugenToml {
    fn default() -> Self {
        Self::new()
    }
}
