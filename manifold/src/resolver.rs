//! Dispatch resolution: signature matching and specificity ranking.
//!
//! This generalizes single-argument generic dispatch's nearest-ancestor
//! rule to every parameter position. Because no single class hierarchy
//! spans independent parameter types, the per-position scores are combined
//! lexicographically: earlier parameters dominate ties on later ones. An
//! exact score tie goes to the most recently registered entry, consistent
//! with the registry's overwrite rule for duplicate signatures.

use crate::registry::{Implementation, Registry};
use manifold_core::{Hierarchy, TypeKey, TypeSpecifier};

/// Specificity of one matched position: 0 for an exact type match,
/// otherwise the ancestor distance walked to reach the declared type.
/// A union scores as its best (lowest-distance) matching member.
fn position_score(spec: &TypeSpecifier, runtime: TypeKey, hierarchy: &Hierarchy) -> Option<u32> {
    spec.members()
        .iter()
        .filter_map(|&member| hierarchy.distance(runtime, member))
        .min()
}

/// Score a signature against the runtime type tuple, position by position.
/// `None` eliminates the signature: wrong arity or any unmatched position.
fn signature_score(
    implementation: &Implementation,
    runtime: &[TypeKey],
    hierarchy: &Hierarchy,
) -> Option<Vec<u32>> {
    let specs = implementation.signature().specs();
    if specs.len() != runtime.len() {
        return None;
    }
    specs
        .iter()
        .zip(runtime)
        .map(|(spec, &key)| position_score(spec, key, hierarchy))
        .collect()
}

/// Pick the registered implementation whose signature best matches the
/// runtime type tuple.
///
/// `None` means nothing matched and the caller falls back to the default
/// implementation; resolution itself never fails. Cost is
/// O(registry size x arity) per call, with no cross-call memoization.
pub(crate) fn resolve<'a>(
    registry: &'a Registry,
    hierarchy: &Hierarchy,
    runtime: &[TypeKey],
) -> Option<&'a Implementation> {
    let mut best: Option<(Vec<u32>, u64, &Implementation)> = None;
    for (implementation, seq) in registry.entries_seq() {
        let Some(score) = signature_score(implementation, runtime, hierarchy) else {
            continue;
        };
        let better = match &best {
            None => true,
            // Lexicographically smaller wins; an exact tie goes to the
            // later registration.
            Some((best_score, best_seq, _)) => {
                score < *best_score || (score == *best_score && seq > *best_seq)
            }
        };
        if better {
            best = Some((score, seq, implementation));
        }
    }

    #[cfg(feature = "tracing")]
    match &best {
        Some((score, _, implementation)) => {
            tracing::trace!(signature = %implementation.signature(), ?score, "resolved dispatch");
        }
        None => tracing::trace!("no registered signature matched; using default implementation"),
    }

    best.map(|(_, _, implementation)| implementation)
}
