//! Candidate validation and registry insertion.

use crate::candidate::FnDef;
use crate::registry::{Implementation, Registry};
use manifold_core::{DispatchWarning, RegisterError, Signature};

/// Validate `candidate` against the default implementation's arity and
/// insert it into `registry`.
///
/// Validation is all-or-nothing: a fatal failure leaves the registry
/// untouched. Parameters carrying a default value each produce one
/// [`DispatchWarning`]; those registrations still succeed, because a
/// default is a caller-education signal rather than a correctness
/// violation.
pub(crate) fn register(
    registry: &mut Registry,
    default_arity: usize,
    candidate: FnDef,
) -> Result<Vec<DispatchWarning>, RegisterError> {
    let mut specs = Vec::with_capacity(candidate.arity());
    for param in candidate.params() {
        match param.annotation() {
            Some(spec) => specs.push(spec.clone()),
            None => {
                return Err(RegisterError::MissingAnnotation {
                    parameter: param.name().to_string(),
                });
            }
        }
    }
    if candidate.arity() != default_arity {
        return Err(RegisterError::ArityMismatch {
            expected: default_arity,
            found: candidate.arity(),
        });
    }

    let (params, body) = candidate.into_parts();
    let warnings: Vec<DispatchWarning> = params
        .iter()
        .filter(|p| p.has_default())
        .map(|p| DispatchWarning {
            parameter: p.name().to_string(),
        })
        .collect();

    let signature = Signature::new(specs);
    #[cfg(feature = "tracing")]
    tracing::debug!(signature = %signature, warnings = warnings.len(), "registering implementation");
    registry.insert(Implementation::new(signature, body));
    Ok(warnings)
}
