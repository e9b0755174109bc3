//! Collision-free identifier assignment.

use std::collections::HashSet;

use crate::Candidate;

/// A candidate with its identifier for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCandidate {
    pub candidate: Candidate,
    /// Final identifier, unique within the run.
    pub identifier: String,
    /// Position among resolved candidates, starting at 0.
    pub ordinal: usize,
}

/// Outcome of resolving a whole candidate list.
#[derive(Debug, Default)]
pub struct Resolution {
    pub resolved: Vec<ResolvedCandidate>,
    /// Candidates for which every name form was already taken.
    pub exhausted: Vec<Candidate>,
}

/// Assigns identifiers for a single generation run.
///
/// Each candidate tries its simple name, then its fully-qualified name; the
/// first one not yet used becomes its base name. The final identifier is
/// `global prefix + candidate prefix + base + candidate suffix + global suffix`.
///
/// The resolver owns the used-name set, so a fresh resolver is needed for
/// every run. Candidates must be fed in source order: when two types share
/// a simple name, the first one keeps it.
#[derive(Debug)]
pub struct NameResolver<'a> {
    global_prefix: &'a str,
    global_suffix: &'a str,
    used_bases: HashSet<String>,
    used_identifiers: HashSet<String>,
    next_ordinal: usize,
}

impl<'a> NameResolver<'a> {
    pub fn new(global_prefix: &'a str, global_suffix: &'a str) -> Self {
        Self {
            global_prefix,
            global_suffix,
            used_bases: HashSet::new(),
            used_identifiers: HashSet::new(),
            next_ordinal: 0,
        }
    }

    /// Resolve one candidate, handing it back if no name form is free.
    pub fn resolve(&mut self, candidate: Candidate) -> Result<ResolvedCandidate, Candidate> {
        let forms = [candidate.ty.simple_name(), candidate.ty.full_name.as_str()];

        let claimed = forms.into_iter().find_map(|base| {
            if self.used_bases.contains(base) {
                return None;
            }
            let identifier = self.compose(&candidate, base);
            // A prefix or suffix can make two distinct bases compose to the same identifier.
            if self.used_identifiers.contains(&identifier) {
                return None;
            }
            Some((base.to_string(), identifier))
        });

        let Some((base, identifier)) = claimed else {
            return Err(candidate);
        };

        self.used_bases.insert(base);
        self.used_identifiers.insert(identifier.clone());

        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;

        Ok(ResolvedCandidate {
            candidate,
            identifier,
            ordinal,
        })
    }

    /// Resolve every candidate in order, consuming the resolver.
    pub fn resolve_all<I>(mut self, candidates: I) -> Resolution
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut resolution = Resolution::default();
        for candidate in candidates {
            match self.resolve(candidate) {
                Ok(resolved) => resolution.resolved.push(resolved),
                Err(candidate) => {
                    tracing::warn!(
                        ty = %candidate.ty.full_name,
                        "no unused name available; skipping menu entry"
                    );
                    resolution.exhausted.push(candidate);
                }
            }
        }
        resolution
    }

    fn compose(&self, candidate: &Candidate, base: &str) -> String {
        [
            self.global_prefix,
            candidate.menu.prefix.as_str(),
            base,
            candidate.menu.suffix.as_str(),
            self.global_suffix,
        ]
        .concat()
    }
}

#[cfg(test)]
mod tests {
    use menugen_core::TypeInfo;

    use super::*;

    fn candidate(name: &str) -> Candidate {
        Candidate::new(TypeInfo::new(name))
    }

    fn identifiers(resolution: &Resolution) -> Vec<&str> {
        resolution
            .resolved
            .iter()
            .map(|r| r.identifier.as_str())
            .collect()
    }

    #[test]
    fn test_simple_name_is_preferred() {
        let resolution = NameResolver::new("", "").resolve_all([candidate("Game.Items.Sword")]);
        assert_eq!(identifiers(&resolution), vec!["Sword"]);
    }

    #[test]
    fn test_collision_falls_back_to_full_name_in_input_order() {
        let resolution =
            NameResolver::new("", "").resolve_all([candidate("A.Sword"), candidate("B.Sword")]);
        assert_eq!(identifiers(&resolution), vec!["Sword", "B.Sword"]);

        let reversed =
            NameResolver::new("", "").resolve_all([candidate("B.Sword"), candidate("A.Sword")]);
        assert_eq!(identifiers(&reversed), vec!["Sword", "A.Sword"]);
    }

    #[test]
    fn test_identifier_composition() {
        let mut resolver = NameResolver::new("X_", "_Y");
        let resolved = resolver
            .resolve(candidate("Game.Item").with_prefix("a").with_suffix("b"))
            .unwrap();
        assert_eq!(resolved.identifier, "X_aItemb_Y");
    }

    #[test]
    fn test_exhausted_candidate_is_skipped() {
        // The second `Sword` has no namespace, so both name forms are taken.
        let resolution = NameResolver::new("", "").resolve_all([
            candidate("Sword"),
            candidate("Sword"),
            candidate("Game.Shield"),
        ]);

        assert_eq!(identifiers(&resolution), vec!["Sword", "Shield"]);
        assert_eq!(resolution.exhausted.len(), 1);
        assert_eq!(resolution.exhausted[0].ty.full_name, "Sword");
    }

    #[test]
    fn test_ordinals_are_dense_after_skips() {
        let resolution = NameResolver::new("", "").resolve_all([
            candidate("Sword"),
            candidate("Sword"),
            candidate("Game.Shield"),
            candidate("Game.Bow"),
        ]);

        let ordinals: Vec<usize> = resolution.resolved.iter().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
    }

    #[test]
    fn test_affixes_cannot_produce_duplicate_identifiers() {
        // "Sw" + "ord" and "" + "Sword" compose to the same identifier.
        let resolution = NameResolver::new("", "").resolve_all([
            candidate("A.ord").with_prefix("Sw"),
            candidate("B.Sword"),
        ]);

        assert_eq!(identifiers(&resolution), vec!["Sword", "B.Sword"]);
    }

    #[test]
    fn test_case_is_preserved() {
        let resolution =
            NameResolver::new("", "").resolve_all([candidate("A.sword"), candidate("B.Sword")]);
        assert_eq!(identifiers(&resolution), vec!["sword", "Sword"]);
    }

    #[test]
    fn test_identifiers_are_unique() {
        let names = [
            "A.Sword", "B.Sword", "C.Sword", "A.Bow", "B.Bow", "Shield", "A.Shield",
        ];
        let resolution = NameResolver::new("", "").resolve_all(names.map(candidate));

        let unique: HashSet<&str> = identifiers(&resolution).into_iter().collect();
        assert_eq!(unique.len(), resolution.resolved.len());
        assert_eq!(resolution.resolved.len(), names.len());
    }
}
