//! The call router: the dispatchable function object.

use crate::args::{self, Args};
use crate::candidate::{Body, FnDef, Param};
use crate::registrar;
use crate::registry::{Implementation, Registry};
use crate::resolver;
use manifold_core::{
    CallError, DispatchWarning, Hierarchy, RegisterError, Signature, TypeKey, Value,
};
use std::any::Any;
use std::fmt;

/// Outcome of a pure dispatch lookup.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// A registered implementation won the specificity ranking.
    Registered(&'a Implementation),
    /// No registered signature matched; the default implementation applies.
    Default,
}

impl Resolution<'_> {
    /// Whether the lookup fell back to the default implementation.
    pub fn is_default(&self) -> bool {
        matches!(self, Resolution::Default)
    }

    /// The winning signature, if a registered implementation won.
    pub fn signature(&self) -> Option<&Signature> {
        match self {
            Resolution::Registered(implementation) => Some(implementation.signature()),
            Resolution::Default => None,
        }
    }
}

struct DefaultImpl {
    params: Vec<Param>,
    body: Body,
}

/// A multiple-argument dispatchable function.
///
/// Owns its [`Registry`], its [`Hierarchy`], and the default
/// implementation; nothing is shared between dispatchers. Registration
/// takes `&mut self` and calls take `&self`, so concurrent registration
/// has to be serialized by the caller while concurrent calls are plain
/// shared reads.
pub struct Dispatcher {
    default: DefaultImpl,
    registry: Registry,
    hierarchy: Hierarchy,
}

/// Create a dispatchable function from its default implementation.
///
/// The default's parameter list fixes the arity, the names used for
/// keyword binding, and any call-time value defaults. Its annotations, if
/// present, are never consulted: the default runs exactly when no
/// registered signature matches.
pub fn multidispatch(default: FnDef) -> Dispatcher {
    let (params, body) = default.into_parts();
    Dispatcher {
        default: DefaultImpl { params, body },
        registry: Registry::new(),
        hierarchy: Hierarchy::new(),
    }
}

impl Dispatcher {
    /// Register a candidate implementation.
    ///
    /// Every candidate parameter must carry an annotation and the arity
    /// must equal the default's; failures leave the registry untouched.
    /// On success, one [`DispatchWarning`] is returned per parameter that
    /// declares a default value. Registering an exactly equal signature
    /// replaces the earlier implementation.
    pub fn register(&mut self, candidate: FnDef) -> Result<Vec<DispatchWarning>, RegisterError> {
        registrar::register(&mut self.registry, self.default.params.len(), candidate)
    }

    /// Pure lookup: run the resolution algorithm for `runtime` without
    /// invoking anything. Exposed for introspection and testing.
    pub fn dispatch(&self, runtime: &[TypeKey]) -> Resolution<'_> {
        match resolver::resolve(&self.registry, &self.hierarchy, runtime) {
            Some(implementation) => Resolution::Registered(implementation),
            None => Resolution::Default,
        }
    }

    /// Route a call.
    ///
    /// Binds `args` against the default implementation's parameters
    /// (positional, then keyword, then declared defaults), resolves on the
    /// bound values' runtime types, and invokes the winner with those
    /// values, returning its output unchanged. Only binding can fail here;
    /// an unmatched call runs the default implementation.
    pub fn call(&self, args: Args) -> Result<Box<dyn Any>, CallError> {
        let bound = args::bind(&self.default.params, args)?;
        let runtime: Vec<TypeKey> = bound.iter().map(Value::key).collect();
        match resolver::resolve(&self.registry, &self.hierarchy, &runtime) {
            Some(implementation) => Ok(implementation.invoke(bound)),
            None => Ok((self.default.body)(bound)),
        }
    }

    /// Read-only view of the registered (signature, implementation) pairs
    /// in insertion order. The default implementation is not an entry.
    pub fn registry(&self) -> impl Iterator<Item = (&Signature, &Implementation)> {
        self.registry.entries()
    }

    /// The subtype hierarchy consulted during resolution.
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Mutable access to the hierarchy, for declaring subtype links.
    pub fn hierarchy_mut(&mut self) -> &mut Hierarchy {
        &mut self.hierarchy
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("arity", &self.default.params.len())
            .field("registered", &self.registry.len())
            .finish_non_exhaustive()
    }
}
