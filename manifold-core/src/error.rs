//! Error types for Manifold.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ManifoldError`] - Top-level error type for all Manifold operations
//! - [`RegisterError`] - Fatal registration-time failures
//! - [`CallError`] - Argument binding failures on a routed call
//! - [`DispatchWarning`] - Non-fatal registration advisory

use thiserror::Error;

/// Top-level error type for all Manifold operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifoldError {
    /// An error occurred while registering an implementation.
    #[error("registration error: {0}")]
    Register(#[from] RegisterError),

    /// An error occurred while binding call arguments.
    #[error("call error: {0}")]
    Call(#[from] CallError),
}

/// Fatal registration-time failures.
///
/// These abort the registration before any registry mutation occurs; a
/// failed `register` leaves the dispatcher exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// A candidate parameter carries no type annotation.
    #[error("parameter `{parameter}` has no type annotation; all candidate parameters must be annotated")]
    MissingAnnotation {
        /// Name of the offending parameter.
        parameter: String,
    },

    /// The candidate's parameter count differs from the default
    /// implementation's.
    #[error("candidate declares {found} parameter(s) but the default implementation declares {expected}")]
    ArityMismatch {
        /// Parameter count of the default implementation.
        expected: usize,
        /// Parameter count of the rejected candidate.
        found: usize,
    },
}

/// Argument binding failures raised by a routed call.
///
/// These surface before dispatch runs; dispatch itself never fails (an
/// unmatched call falls back to the default implementation).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// More positional arguments than formal parameters.
    #[error("expected at most {expected} positional argument(s), got {found}")]
    TooManyPositional {
        /// Number of formal parameters.
        expected: usize,
        /// Number of positional arguments supplied.
        found: usize,
    },

    /// A keyword argument names no formal parameter.
    #[error("unknown keyword argument `{name}`")]
    UnknownKeyword {
        /// The unmatched keyword.
        name: String,
    },

    /// A parameter was supplied both positionally and by keyword.
    #[error("argument `{name}` supplied both positionally and by keyword")]
    DuplicateArgument {
        /// Name of the doubly-bound parameter.
        name: String,
    },

    /// A parameter with no declared default was left unbound.
    #[error("missing required argument `{name}`")]
    MissingArgument {
        /// Name of the unbound parameter.
        name: String,
    },
}

/// Non-fatal advisory emitted when a registered candidate declares a
/// parameter default.
///
/// Default values never influence which implementation a call is routed
/// to, so a default on a candidate parameter is almost always a mistake.
/// Registration still succeeds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parameter `{parameter}` has a default value; default values are not considered when dispatching")]
pub struct DispatchWarning {
    /// Name of the parameter carrying the default.
    pub parameter: String,
}
