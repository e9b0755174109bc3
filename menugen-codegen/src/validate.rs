//! Structural eligibility rules for candidates.

use thiserror::Error;

use crate::Candidate;

/// Why a candidate is not eligible for generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("type is abstract")]
    Abstract,
    #[error("type is an unbound generic definition")]
    GenericDefinition,
    #[error("type does not derive from '{base}'")]
    NotDerived { base: String },
    #[error("type is not public")]
    NotPublic,
}

/// Eligibility predicate over static type metadata.
///
/// A candidate is valid when it is concrete, not an unbound generic
/// definition, a strict subclass of the base type, and public.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    base_type: &'a str,
}

impl<'a> Validator<'a> {
    pub fn new(base_type: &'a str) -> Self {
        Self { base_type }
    }

    /// The first rule `candidate` breaks, if any.
    pub fn check(&self, candidate: &Candidate) -> Result<(), Rejection> {
        let ty = &candidate.ty;
        if ty.is_abstract {
            return Err(Rejection::Abstract);
        }
        if ty.is_generic_definition {
            return Err(Rejection::GenericDefinition);
        }
        if !ty.derives_from(self.base_type) {
            return Err(Rejection::NotDerived {
                base: self.base_type.to_string(),
            });
        }
        if !ty.is_public {
            return Err(Rejection::NotPublic);
        }
        Ok(())
    }

    pub fn is_valid(&self, candidate: &Candidate) -> bool {
        self.check(candidate).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use menugen_core::TypeInfo;

    use super::*;

    const BASE: &str = "UnityEngine.ScriptableObject";

    fn derived(name: &str) -> TypeInfo {
        TypeInfo::new(name).with_ancestors([BASE])
    }

    #[test]
    fn test_concrete_public_subclass_is_valid() {
        let validator = Validator::new(BASE);
        assert!(validator.is_valid(&Candidate::new(derived("Game.Sword"))));
    }

    #[test]
    fn test_indirect_subclass_is_valid() {
        let validator = Validator::new(BASE);
        let ty = TypeInfo::new("Game.Sword").with_ancestors(["Game.Weapon", "Game.Item", BASE]);
        assert!(validator.is_valid(&Candidate::new(ty)));
    }

    #[test]
    fn test_abstract_is_rejected() {
        let validator = Validator::new(BASE);
        let candidate = Candidate::new(derived("Game.Item").abstract_type());
        assert_eq!(validator.check(&candidate), Err(Rejection::Abstract));
    }

    #[test]
    fn test_generic_definition_is_rejected() {
        let validator = Validator::new(BASE);
        let candidate = Candidate::new(derived("Game.Box`1").generic_definition());
        assert_eq!(validator.check(&candidate), Err(Rejection::GenericDefinition));
    }

    #[test]
    fn test_non_subclass_is_rejected() {
        let validator = Validator::new(BASE);
        let candidate = Candidate::new(TypeInfo::new("Game.Plain"));
        assert_eq!(
            validator.check(&candidate),
            Err(Rejection::NotDerived {
                base: BASE.to_string()
            })
        );
    }

    #[test]
    fn test_base_type_itself_is_rejected() {
        let validator = Validator::new(BASE);
        let candidate = Candidate::new(TypeInfo::new(BASE));
        assert!(!validator.is_valid(&candidate));
    }

    #[test]
    fn test_non_public_is_rejected() {
        let validator = Validator::new(BASE);
        let candidate = Candidate::new(derived("Game.Hidden").internal());
        assert_eq!(validator.check(&candidate), Err(Rejection::NotPublic));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let validator = Validator::new(BASE);
        let candidate = Candidate::new(TypeInfo::new("Game.X").abstract_type().internal());
        assert_eq!(validator.check(&candidate), Err(Rejection::Abstract));
    }
}
