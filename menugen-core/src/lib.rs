//! Core types and utilities for the menugen asset-menu generator.
//!
//! This crate provides the type identity model and the output file
//! handling shared by the manifest and code generation crates.

mod file;
mod types;
mod utils;

// File output
pub use file::{DirPolicy, OutputError, OutputPath, WriteOutcome};
// Type identity
pub use types::TypeInfo;
// Name utilities
pub use utils::{is_type_name, is_type_segment, simple_name, source_name};
