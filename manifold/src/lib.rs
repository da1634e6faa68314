//! # manifold
//!
//! Multiple-argument runtime dispatch: register several implementations of
//! one logical function, each constrained on the types of *all* of its
//! parameters, and have calls routed to the implementation whose declared
//! parameter types best match the runtime types of the supplied arguments.
//!
//! # Four-Component Architecture
//!
//! Manifold is built from four components with strictly one-way
//! dependencies:
//!
//! ## Registry
//!
//! An insertion-ordered store of (signature, implementation) pairs plus
//! one distinguished default implementation. Leaf component; later
//! registration of an equal signature overwrites, nothing is ever removed.
//!
//! ## Registrar
//!
//! Validates incoming [`FnDef`] candidates (every parameter annotated,
//! arity equal to the default's) and inserts them. Validation is
//! all-or-nothing; a parameter default is advisory only and produces a
//! [`DispatchWarning`].
//!
//! ## Resolver
//!
//! A pure function from runtime argument types to the best-matching
//! implementation. Each position is matched against its specifier by exact
//! type or registered ancestor (unions match any member); surviving
//! signatures are ranked by per-position ancestor distance, compared
//! lexicographically with earlier parameters dominating. Exact ties go to
//! the most recent registration; no survivor means the default runs.
//!
//! ## Call Router
//!
//! The [`Dispatcher`] returned by [`multidispatch`]. On each call it binds
//! positional and keyword arguments against the default implementation's
//! parameter list (materializing declared value defaults), extracts the
//! bound values' runtime types, resolves, and invokes the winner.
//!
//! # Example
//!
//! ```
//! use manifold::{Args, FnDef, Param, Value, multidispatch};
//!
//! let default = FnDef::new(|_args| "default".to_string())
//!     .param(Param::new("a"))
//!     .param(Param::new("b").default_value(|| Value::of(Option::<String>::None)));
//! let mut greet = multidispatch(default);
//!
//! greet
//!     .register(
//!         FnDef::new(|mut args: Vec<Value>| {
//!             let b: String = args.pop().unwrap().take().unwrap();
//!             let a: i64 = args.pop().unwrap().take().unwrap();
//!             format!("int:{a},str:{b}")
//!         })
//!         .param(Param::typed::<i64>("a"))
//!         .param(Param::typed::<String>("b")),
//!     )
//!     .unwrap();
//!
//! let out = greet.call(Args::new().pos(5_i64).pos("hello".to_string())).unwrap();
//! assert_eq!(*out.downcast::<String>().unwrap(), "int:5,str:hello");
//!
//! // Nothing matches (i64, Option<String>); the default runs.
//! let out = greet.call(Args::new().pos(5_i64)).unwrap();
//! assert_eq!(*out.downcast::<String>().unwrap(), "default");
//! ```

#![deny(clippy::wildcard_imports)]

mod args;
mod candidate;
mod dispatcher;
mod registrar;
mod registry;
mod resolver;
pub mod testing;

// Re-exports
pub use args::Args;
pub use candidate::{FnDef, Param};
pub use dispatcher::{Dispatcher, Resolution, multidispatch};
pub use registry::{Implementation, Registry};

pub use manifold_core::{
    CallError, DispatchWarning, Hierarchy, ManifoldError, RegisterError, Signature, TypeKey,
    TypeSpecifier, Value,
};
