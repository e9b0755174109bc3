//! Type lookups over the `[types]` registry.

use indexmap::IndexSet;
use menugen_core::TypeInfo;

use super::{Manifest, MenuDecl, TypeDecl};

impl Manifest {
    /// Look up a declared type by its fully-qualified name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    /// Walk the `extends` chain starting at `name`, nearest base first.
    ///
    /// The walk stops at the first base that is not declared in the
    /// registry; that base is still included. A revisited name ends the
    /// walk, so this terminates even on an unvalidated manifest.
    pub fn ancestors(&self, name: &str) -> Vec<String> {
        let mut seen = IndexSet::new();
        seen.insert(name);

        let mut current = self.types.get(name).and_then(TypeDecl::base);
        while let Some(base) = current {
            if !seen.insert(base) {
                break;
            }
            current = self.types.get(base).and_then(TypeDecl::base);
        }

        seen.into_iter().skip(1).map(str::to_string).collect()
    }

    /// Build the static type metadata for a declared type.
    pub fn type_info(&self, name: &str) -> Option<TypeInfo> {
        let decl = self.types.get(name)?;
        Some(TypeInfo {
            full_name: name.to_string(),
            assembly: decl.assembly.clone(),
            is_abstract: decl.is_abstract,
            is_generic_definition: decl.is_generic,
            is_public: decl.is_public,
            ancestors: self.ancestors(name),
        })
    }

    /// Types carrying menu metadata, in document order.
    pub fn tagged(&self) -> impl Iterator<Item = (&str, &MenuDecl)> {
        self.types
            .iter()
            .filter_map(|(name, decl)| decl.menu.as_ref().map(|menu| (name.as_str(), menu)))
    }
}
