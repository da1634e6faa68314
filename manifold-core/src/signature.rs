//! Registration signatures: the registry keys.

use crate::specifier::TypeSpecifier;
use std::fmt;

/// The ordered per-parameter constraints of one registered implementation.
///
/// Two signatures are equal iff their specifier sequences are equal
/// element-wise. Signatures are compared, never merged.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    specs: Vec<TypeSpecifier>,
}

impl Signature {
    /// Build a signature from per-parameter specifiers in declaration order.
    pub fn new(specs: Vec<TypeSpecifier>) -> Self {
        Self { specs }
    }

    /// Number of formal parameters this signature covers.
    pub fn arity(&self) -> usize {
        self.specs.len()
    }

    /// The per-parameter specifiers, in declaration order.
    pub fn specs(&self) -> &[TypeSpecifier] {
        &self.specs
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature{self}")
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, spec) in self.specs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{spec}")?;
        }
        f.write_str(")")
    }
}
