// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_BASE_TYPE, GeneratorConfig, Manifest, ManifestFile, MenuDecl, ParseContext, TypeDecl,
};
