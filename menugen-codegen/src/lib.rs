//! Create-asset menu generation for menugen.
//!
//! A generation run takes candidate types from a [`CandidateSource`],
//! filters them through the [`Validator`], gives each survivor a unique
//! identifier with the [`NameResolver`], renders the file through a
//! [`HostTemplate`] and writes it atomically.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text building ([`CodeBuilder`](builder::CodeBuilder))
//! - [`generation`] - Auxiliary files such as the starter `menugen.toml`
//!
//! Everything else is re-exported at the crate root.

pub mod builder;
pub mod generation;

mod candidate;
mod config;
mod diagnostic;
mod emit;
mod generator;
mod resolve;
mod template;
mod validate;

pub use candidate::{Candidate, CandidateSource, ManifestSource, MenuMeta};
pub use config::GenerationConfig;
pub use diagnostic::{Diagnostic, Severity};
pub use emit::Emitter;
pub use generator::{GenerateError, GenerationReport, Generator, Plan, RejectedCandidate};
pub use resolve::{NameResolver, Resolution, ResolvedCandidate};
pub use template::{HostApi, HostTemplate, MenuEntry, UNITY_CSHARP, UnityCSharp};
pub use validate::{Rejection, Validator};
