//! Files menugen writes besides the generated menu itself.

mod menugen_toml;

pub use menugen_toml::MenugenToml;
