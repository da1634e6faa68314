//! Explicitly registered subtype links and ancestor distance.

use crate::ty::TypeKey;
use std::any::Any;
use std::collections::HashMap;

/// Walk limit for malformed link chains. Chains deeper than this are
/// treated as unrelated.
const MAX_CHAIN: u32 = 64;

/// Registered single-parent subtype links between dispatchable types.
///
/// Rust has no reflective class hierarchy, so the subtype relations the
/// resolver consults are declared explicitly, one [`link`](Hierarchy::link)
/// per child/parent pair. Each dispatcher owns its own hierarchy; there is
/// no global table.
#[derive(Debug, Default)]
pub struct Hierarchy {
    parents: HashMap<TypeKey, TypeKey>,
}

impl Hierarchy {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `Sub` as a direct subtype of `Super`.
    ///
    /// A type has at most one declared parent; re-linking a child replaces
    /// its parent.
    pub fn link<Sub: Any, Super: Any>(&mut self) -> &mut Self {
        self.parents.insert(TypeKey::of::<Sub>(), TypeKey::of::<Super>());
        self
    }

    /// Number of hierarchy levels from `runtime` up to `declared`.
    ///
    /// `Some(0)` for the exact type, `Some(n)` after walking `n` parent
    /// links, `None` when the types are unrelated.
    pub fn distance(&self, runtime: TypeKey, declared: TypeKey) -> Option<u32> {
        if runtime == declared {
            return Some(0);
        }
        let mut current = runtime;
        let mut steps = 0u32;
        while let Some(&parent) = self.parents.get(&current) {
            steps += 1;
            if steps > MAX_CHAIN {
                // Cycle guard: malformed chains never match.
                return None;
            }
            if parent == declared {
                return Some(steps);
            }
            current = parent;
        }
        None
    }

    /// Whether `runtime` is `declared` or a registered subtype of it.
    pub fn is_subtype(&self, runtime: TypeKey, declared: TypeKey) -> bool {
        self.distance(runtime, declared).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Hierarchy;
    use crate::ty::TypeKey;

    // Marker types; only their identities matter here.
    #[allow(dead_code)]
    struct Animal;
    #[allow(dead_code)]
    struct Cat;
    #[allow(dead_code)]
    struct Kitten;

    #[test]
    fn test_exact_type_is_distance_zero() {
        let hierarchy = Hierarchy::new();
        assert_eq!(
            hierarchy.distance(TypeKey::of::<Cat>(), TypeKey::of::<Cat>()),
            Some(0)
        );
    }

    #[test]
    fn test_chain_walk_counts_levels() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.link::<Kitten, Cat>().link::<Cat, Animal>();

        assert_eq!(
            hierarchy.distance(TypeKey::of::<Kitten>(), TypeKey::of::<Cat>()),
            Some(1)
        );
        assert_eq!(
            hierarchy.distance(TypeKey::of::<Kitten>(), TypeKey::of::<Animal>()),
            Some(2)
        );
        assert_eq!(
            hierarchy.distance(TypeKey::of::<Cat>(), TypeKey::of::<Animal>()),
            Some(1)
        );
    }

    #[test]
    fn test_unrelated_types_do_not_match() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.link::<Cat, Animal>();

        assert_eq!(
            hierarchy.distance(TypeKey::of::<Animal>(), TypeKey::of::<Cat>()),
            None,
            "subtyping is directional"
        );
        assert!(!hierarchy.is_subtype(TypeKey::of::<Kitten>(), TypeKey::of::<Animal>()));
    }

    #[test]
    fn test_cycle_guard_terminates() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.link::<Cat, Animal>().link::<Animal, Cat>();

        assert_eq!(
            hierarchy.distance(TypeKey::of::<Cat>(), TypeKey::of::<Kitten>()),
            None
        );
    }

    #[test]
    fn test_relink_replaces_parent() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.link::<Kitten, Cat>();
        hierarchy.link::<Kitten, Animal>();

        assert_eq!(
            hierarchy.distance(TypeKey::of::<Kitten>(), TypeKey::of::<Cat>()),
            None
        );
        assert_eq!(
            hierarchy.distance(TypeKey::of::<Kitten>(), TypeKey::of::<Animal>()),
            Some(1)
        );
    }
}
