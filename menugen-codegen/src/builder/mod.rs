//! Text building blocks for emitted source.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
