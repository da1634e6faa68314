//! Function definitions handed to the dispatcher.
//!
//! Rust cannot introspect a function's parameter names or annotations at
//! runtime, so a [`FnDef`] spells them out: an ordered [`Param`] list plus
//! the callable body. The same shape serves both the default implementation
//! and registered candidates; the registrar decides which rules apply.

use manifold_core::{TypeSpecifier, Value};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A callable implementation body over bound arguments.
pub(crate) type Body = Arc<dyn Fn(Vec<Value>) -> Box<dyn Any> + Send + Sync>;

pub(crate) type DefaultFactory = Arc<dyn Fn() -> Value + Send + Sync>;

/// One formal parameter: a name, an optional dispatch annotation, and an
/// optional default value factory.
pub struct Param {
    name: String,
    annotation: Option<TypeSpecifier>,
    default: Option<DefaultFactory>,
}

impl Param {
    /// An unannotated parameter.
    ///
    /// Valid on the default implementation, whose annotations are never
    /// consulted; rejected at registration time for candidates.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            default: None,
        }
    }

    /// A parameter annotated with the single concrete type `T`.
    pub fn typed<T: Any>(name: impl Into<String>) -> Self {
        Self::with_spec(name, TypeSpecifier::of::<T>())
    }

    /// A parameter annotated with an explicit specifier, e.g. a union.
    pub fn with_spec(name: impl Into<String>, spec: TypeSpecifier) -> Self {
        Self {
            name: name.into(),
            annotation: Some(spec),
            default: None,
        }
    }

    /// Attach a default value factory.
    ///
    /// The factory fills this slot when a call omits the argument. On the
    /// default implementation this is the normal way to make a parameter
    /// optional; on a candidate it draws a
    /// [`DispatchWarning`](manifold_core::DispatchWarning), because defaults
    /// never influence dispatch.
    pub fn default_value<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(Arc::new(factory));
        self
    }

    /// The parameter's name, used for keyword binding.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared annotation, if any.
    pub fn annotation(&self) -> Option<&TypeSpecifier> {
        self.annotation.as_ref()
    }

    /// Whether a default value factory is attached.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub(crate) fn default_factory(&self) -> Option<&DefaultFactory> {
        self.default.as_ref()
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param")
            .field("name", &self.name)
            .field("annotation", &self.annotation)
            .field("has_default", &self.has_default())
            .finish()
    }
}

/// A callable body plus its ordered parameter list.
///
/// Bodies receive the bound arguments in declaration order, one [`Value`]
/// per formal parameter, and may return any `'static` type; the dispatcher
/// hands the boxed output back unchanged.
pub struct FnDef {
    params: Vec<Param>,
    body: Body,
}

impl FnDef {
    /// Wrap a body. Parameters are appended with [`FnDef::param`].
    pub fn new<F, R>(body: F) -> Self
    where
        F: Fn(Vec<Value>) -> R + Send + Sync + 'static,
        R: Any,
    {
        Self {
            params: Vec::new(),
            body: Arc::new(move |args| Box::new(body(args)) as Box<dyn Any>),
        }
    }

    /// Append a formal parameter. Declaration order is dispatch order.
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub(crate) fn params(&self) -> &[Param] {
        &self.params
    }

    pub(crate) fn into_parts(self) -> (Vec<Param>, Body) {
        (self.params, self.body)
    }
}

impl fmt::Debug for FnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnDef")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
