//! Type identity as seen by the generator.

use crate::utils::{simple_name, source_name};

/// Static metadata describing one type known to a candidate source.
///
/// Everything the eligibility rules need is carried here, so validation can
/// run without access to the host's reflection facilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Fully-qualified name, e.g. `Game.Items.Sword` or `Game.Outer+Inner`.
    pub full_name: String,
    /// Assembly the type lives in, when known.
    pub assembly: Option<String>,
    pub is_abstract: bool,
    /// Unbound generic template such as `Container`1`.
    pub is_generic_definition: bool,
    pub is_public: bool,
    /// Base-type chain, nearest first. Does not contain the type itself.
    pub ancestors: Vec<String>,
}

impl TypeInfo {
    /// Create a public, concrete, non-generic type with no known ancestors.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            assembly: None,
            is_abstract: false,
            is_generic_definition: false,
            is_public: true,
            ancestors: Vec::new(),
        }
    }

    pub fn with_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assembly = Some(assembly.into());
        self
    }

    pub fn with_ancestors<I, S>(mut self, ancestors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ancestors = ancestors.into_iter().map(Into::into).collect();
        self
    }

    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn generic_definition(mut self) -> Self {
        self.is_generic_definition = true;
        self
    }

    pub fn internal(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// The unqualified type name (`Sword` for `Game.Items.Sword`).
    pub fn simple_name(&self) -> &str {
        simple_name(&self.full_name)
    }

    /// Assembly-qualified name, or the full name if no assembly is known.
    pub fn qualified_name(&self) -> String {
        match &self.assembly {
            Some(assembly) => format!("{}, {}", self.full_name, assembly),
            None => self.full_name.clone(),
        }
    }

    /// The name used to reference this type from generated source.
    pub fn source_name(&self) -> String {
        source_name(&self.full_name)
    }

    /// Strict subclass check: a type never derives from itself.
    pub fn derives_from(&self, base: &str) -> bool {
        self.ancestors.iter().any(|ancestor| ancestor == base)
    }
}
