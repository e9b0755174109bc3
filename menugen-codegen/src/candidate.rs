//! Candidates and the sources that supply them.

use menugen_core::TypeInfo;
use menugen_manifest::{Manifest, MenuDecl};

/// Menu metadata attached to a tagged type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuMeta {
    pub prefix: String,
    pub suffix: String,
    /// Priority override for this entry only.
    pub order: Option<i64>,
}

impl From<&MenuDecl> for MenuMeta {
    fn from(decl: &MenuDecl) -> Self {
        Self {
            prefix: decl.prefix.clone(),
            suffix: decl.suffix.clone(),
            order: decl.order,
        }
    }
}

/// A type tagged for a create-asset menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub ty: TypeInfo,
    pub menu: MenuMeta,
}

impl Candidate {
    pub fn new(ty: TypeInfo) -> Self {
        Self {
            ty,
            menu: MenuMeta::default(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.menu.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.menu.suffix = suffix.into();
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.menu.order = Some(order);
        self
    }
}

/// Supplies the tagged types a generation run works on.
///
/// Implementations decide how types are discovered (a static registry,
/// build-time metadata, a plugin list). The order of the returned
/// candidates is significant: name collisions are resolved in that order.
pub trait CandidateSource {
    fn candidates(&self) -> Vec<Candidate>;
}

impl CandidateSource for Vec<Candidate> {
    fn candidates(&self) -> Vec<Candidate> {
        self.clone()
    }
}

/// Candidates taken from the `[types]` registry of a manifest.
///
/// Every type with a `menu` entry becomes a candidate, in document order,
/// with its ancestor chain resolved through the registry.
pub struct ManifestSource<'a> {
    manifest: &'a Manifest,
}

impl<'a> ManifestSource<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }
}

impl CandidateSource for ManifestSource<'_> {
    fn candidates(&self) -> Vec<Candidate> {
        self.manifest
            .tagged()
            .filter_map(|(name, menu)| {
                let ty = self.manifest.type_info(name)?;
                Some(Candidate {
                    ty,
                    menu: menu.into(),
                })
            })
            .collect()
    }
}
