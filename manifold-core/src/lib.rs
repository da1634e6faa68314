//! # manifold-core
//!
//! Core type model for the Manifold multiple-argument dispatch library.
//!
//! This crate has minimal dependencies and holds the closed, validated
//! representation the dispatch engine operates on. Rust has no reflective
//! class hierarchy or runtime annotations, so everything a dispatcher needs
//! to know about types is declared explicitly through these building blocks:
//!
//! - [`TypeKey`] - identity of a runtime type participating in dispatch
//! - [`Value`] - one call argument, tagged with the type it was built from
//! - [`TypeSpecifier`] - one parameter's declared constraint (a type or a union)
//! - [`Signature`] - the ordered per-parameter constraints of one implementation
//! - [`Hierarchy`] - explicitly registered subtype links and ancestor distance
//!
//! # Error Types
//!
//! - [`ManifoldError`] - Top-level error type
//! - [`RegisterError`] - Fatal registration failures
//! - [`CallError`] - Argument binding failures
//! - [`DispatchWarning`] - Non-fatal registration advisory

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod hierarchy;
mod signature;
mod specifier;
mod ty;

// Re-exports
pub use error::{CallError, DispatchWarning, ManifoldError, RegisterError};
pub use hierarchy::Hierarchy;
pub use signature::Signature;
pub use specifier::TypeSpecifier;
pub use ty::{TypeKey, Value};
